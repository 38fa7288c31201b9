//! Single-run entry points.
//!
//! These are the only functions outside consumers (sweeps, aggregation,
//! export) need: draw a population from a [`RunConfig`], simulate it under
//! the configured topology, and hand back a [`RunResult`].

use qs_agent::PopulationBuilder;
use qs_core::{RunConfig, TopologyKind};

use crate::{
    NoopObserver, RunObserver, RunResult, SeparateQueues, SimBuilder, SimResult, SingleChain,
    Topology,
};

/// Simulate one run described by `config`.
///
/// # Errors
/// Configuration errors are returned before anything is drawn; see
/// [`Sim::run`][crate::Sim::run] for the rest.
pub fn run(config: &RunConfig) -> SimResult<RunResult> {
    run_observed(config, &mut NoopObserver)
}

/// Like [`run`], reporting loop events to `observer`.
pub fn run_observed<O: RunObserver>(config: &RunConfig, observer: &mut O) -> SimResult<RunResult> {
    config.validate()?;
    match config.topology {
        TopologyKind::Separate => drive(config, SeparateQueues, observer),
        TopologyKind::Single => drive(config, SingleChain, observer),
    }
}

fn drive<T: Topology, O: RunObserver>(
    config:   &RunConfig,
    topology: T,
    observer: &mut O,
) -> SimResult<RunResult> {
    let population = PopulationBuilder::from_config(config)?.build()?;
    SimBuilder::new(population, topology)
        .tick_size(config.tick_size)
        .max_ticks(config.max_ticks)
        .seed(config.seed)
        .build()?
        .run(observer)
}
