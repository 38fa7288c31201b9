//! Run observer trait for progress reporting and data collection.

use qs_agent::Population;
use qs_core::{AgentId, ResourceId, Tick};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: completion counter
///
/// ```rust,ignore
/// struct Finished(usize);
///
/// impl RunObserver for Finished {
///     fn on_complete(&mut self, _tick: Tick, _time: f64, _a: AgentId, _r: ResourceId) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called at the very start of each tick, before any resource is polled.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after `agent` joins the tail of `resource`'s queue.  Initial
    /// admissions are reported at `Tick::ZERO`.
    fn on_enqueue(&mut self, _tick: Tick, _time: f64, _agent: AgentId, _resource: ResourceId) {}

    /// Called when `agent` leaves the head of `resource`'s queue.
    fn on_complete(&mut self, _tick: Tick, _time: f64, _agent: AgentId, _resource: ResourceId) {}

    /// Called at the end of each tick with read-only access to all queues
    /// and agents.
    fn on_tick_end(&mut self, _tick: Tick, _population: &Population) {}

    /// Called once after the queues drain.  `final_tick` is the number of
    /// full passes that ran.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
