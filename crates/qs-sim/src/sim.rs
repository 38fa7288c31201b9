//! The `Sim` struct and its tick loop.

use qs_agent::Population;
use qs_core::{AgentId, ResourceId, SimClock};
use tracing::{debug, info, trace};

use crate::{RunObserver, RunResult, SimError, SimResult, Topology};

/// The main simulation runner.
///
/// `Sim<T>` owns one run's population and drives the fixed-step loop under
/// topology `T`:
///
/// 1. **Admit** (first step only): each agent enqueues at
///    [`Topology::entry`] at time 0.
/// 2. **Poll**: every resource, in id order, checks its head at the current
///    time.
/// 3. **Route**: each finished agent is sent to [`Topology::next`], in the
///    same tick.
///
/// The loop stops when every queue is empty.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<T: Topology> {
    /// Scheduler clock: tick counter plus tick size.
    pub clock: SimClock,

    /// Agent and resource arenas.  Mutated only by the loop.
    pub population: Population,

    /// The routing rule.
    pub topology: T,

    /// Abort with [`SimError::NonTermination`] once this many passes ran.
    pub max_ticks: u64,

    /// Seed the population was drawn from, copied into the result.
    pub seed: Option<u64>,

    pub(crate) admitted: bool,
}

impl<T: Topology> Sim<T> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every queue is empty and return the outcome.
    ///
    /// # Errors
    /// - `Agent` for any invalid-state transition (a routing bug).
    /// - `NonTermination` if `max_ticks` passes run without draining.
    /// - `Stranded` if the queues drain while an agent still has wants.
    pub fn run<O: RunObserver>(&mut self, observer: &mut O) -> SimResult<RunResult> {
        info!(
            topology  = %self.topology.kind(),
            agents    = self.population.agents.len(),
            resources = self.population.resources.len(),
            tick_size = self.clock.tick_size,
            "run started"
        );

        while self.step(observer)? {}

        self.check_stranded()?;
        observer.on_run_end(self.clock.current_tick);

        let result = self.result();
        info!(ticks = result.ticks, end_time = result.end_time, "run finished");
        Ok(result)
    }

    /// Execute one full pass over every resource.
    ///
    /// Returns `Ok(false)` without doing anything once every queue is empty.
    /// The first call also admits the population.
    pub fn step<O: RunObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        self.admit(observer)?;
        if self.population.all_queues_empty() {
            return Ok(false);
        }

        let tick = self.clock.current_tick;
        if tick.0 >= self.max_ticks {
            return Err(SimError::NonTermination {
                ticks:   tick.0,
                queued:  self.population.queued(),
                partial: Box::new(self.result()),
            });
        }

        observer.on_tick_start(tick);
        let now = self.clock.now();

        for i in 0..self.population.resources.len() {
            let resource = self.population.resources[i].id;
            let Some(agent) = self.population.poll(resource, now)? else {
                continue;
            };
            observer.on_complete(tick, now, agent, resource);
            if let Some(a) = self.population.agent(agent) {
                debug!(%agent, %resource, time = now, remaining = a.wants().len(), "service complete");
            }

            if let Some(next) = self.topology.next(agent, resource, &self.population)? {
                self.enqueue(next, agent, observer)?;
            }
        }

        observer.on_tick_end(tick, &self.population);
        self.clock.advance();
        Ok(true)
    }

    /// Snapshot the current state as a [`RunResult`].
    pub fn result(&self) -> RunResult {
        RunResult::capture(
            self.topology.kind(),
            self.seed,
            self.clock.tick_size,
            self.clock.current_tick.0,
            &self.population,
        )
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn admit<O: RunObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.admitted {
            return Ok(());
        }
        self.admitted = true;

        for i in 0..self.population.agents.len() {
            let agent = self.population.agents[i].id;
            if let Some(resource) = self.topology.entry(agent, &self.population)? {
                self.enqueue(resource, agent, observer)?;
            }
        }
        Ok(())
    }

    fn enqueue<O: RunObserver>(
        &mut self,
        resource: ResourceId,
        agent:    AgentId,
        observer: &mut O,
    ) -> SimResult<()> {
        let tick = self.clock.current_tick;
        let now = self.clock.now();
        self.population.enqueue(resource, agent, now)?;
        trace!(%agent, %resource, time = now, "enqueued");
        observer.on_enqueue(tick, now, agent, resource);
        Ok(())
    }

    fn check_stranded(&self) -> SimResult<()> {
        match self.population.agents.iter().find(|a| !a.wants().is_empty()) {
            Some(a) => Err(SimError::Stranded {
                agent:     a.id,
                remaining: a.wants().len(),
            }),
            None => Ok(()),
        }
    }
}
