//! `qs-sim` — the scheduler and queue topologies for `rust_qsim`.
//!
//! # Fixed-step tick loop
//!
//! ```text
//! admit:  every agent asks the topology for an entry resource and enqueues
//!         there at time 0.
//! loop:
//!   ① stop if every queue is empty
//!   ② for each resource, in id order:
//!        poll(now) → finished agent?
//!          └─ topology.next(agent, from) → enqueue(now) or exit
//!   ③ advance the clock by one tick
//! ```
//!
//! Completions are only seen at tick boundaries, so any completion time is
//! late by at most one tick.
//!
//! # Quick-start
//!
//! ```rust
//! use qs_core::{RunConfig, TopologyKind};
//!
//! let config = RunConfig {
//!     agent_count: 20,
//!     topology: TopologyKind::Single,
//!     tick_size: 0.05,
//!     ..RunConfig::default()
//! };
//! let result = qs_sim::run(&config).unwrap();
//! assert!(result.all_completed());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod result;
pub mod run;
pub mod sim;
pub mod topology;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RunObserver};
pub use result::{AgentOutcome, ResourceOutcome, RunResult};
pub use run::{run, run_observed};
pub use sim::Sim;
pub use topology::{SeparateQueues, SingleChain, Topology};
