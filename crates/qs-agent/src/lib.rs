//! `qs-agent` — resources, agents, and the population arena for `rust_qsim`.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `Agent`, `AgentState` (the service state machine)         |
//! | [`resource`]    | `Resource` (single-server FIFO queue)                     |
//! | [`population`]  | `Population` (agent + resource arenas)                    |
//! | [`builder`]     | `PopulationBuilder` (draws a scenario from a seed)        |
//! | [`error`]       | `AgentError`, `AgentResult`                               |
//!
//! Agents and resources refer to each other only through `AgentId` /
//! `ResourceId` handles into the `Population` arenas.  Operations that touch
//! both sides (enqueue, poll) take the agent arena as an explicit `&mut`
//! argument so the borrow split is visible at the call site.

pub mod agent;
pub mod builder;
pub mod error;
pub mod population;
pub mod resource;

#[cfg(test)]
mod tests;

pub use agent::{Agent, AgentState};
pub use builder::PopulationBuilder;
pub use error::{AgentError, AgentResult};
pub use population::Population;
pub use resource::Resource;
