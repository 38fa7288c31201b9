//! Fluent builder for constructing a [`Sim`].

use qs_agent::Population;
use qs_core::SimClock;

use crate::{Sim, SimError, SimResult, Topology};

/// Fluent builder for [`Sim<T>`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default         |
/// |-------------------|-----------------|
/// | `.tick_size(x)`   | `0.01`          |
/// | `.max_ticks(n)`   | `100_000_000`   |
/// | `.seed(s)`        | none            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(population, SeparateQueues)
///     .tick_size(0.5)
///     .build()?;
/// let result = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<T: Topology> {
    population: Population,
    topology:   T,
    tick_size:  f64,
    max_ticks:  u64,
    seed:       Option<u64>,
}

impl<T: Topology> SimBuilder<T> {
    pub fn new(population: Population, topology: T) -> Self {
        Self {
            population,
            topology,
            tick_size: 0.01,
            max_ticks: 100_000_000,
            seed:      None,
        }
    }

    /// Simulated time per tick.
    pub fn tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Pass budget before the run is declared nonterminating.
    pub fn max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Record the seed the population was drawn from.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<T>> {
        if !self.tick_size.is_finite() || self.tick_size <= 0.0 {
            return Err(SimError::Config(format!(
                "tick_size must be a finite positive number, got {}",
                self.tick_size
            )));
        }
        if self.max_ticks == 0 {
            return Err(SimError::Config("max_ticks must be at least 1".into()));
        }
        if !self.population.all_queues_empty() {
            return Err(SimError::Config(format!(
                "population already has {} agents queued",
                self.population.queued()
            )));
        }

        Ok(Sim {
            clock:      SimClock::new(self.tick_size),
            population: self.population,
            topology:   self.topology,
            max_ticks:  self.max_ticks,
            seed:       self.seed,
            admitted:   false,
        })
    }
}
