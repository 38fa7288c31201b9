//! `qs-core` — foundational types for the `rust_qsim` queue-topology simulator.
//!
//! This crate is a dependency of every other `qs-*` crate.  It has no `qs-*`
//! dependencies and only a few external ones (`rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ResourceId`                               |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (scenario-level)     |
//! | [`dist`]        | `ServiceDistributions` (Gamma speeds, LogNormal draws)|
//! | [`config`]      | `RunConfig`, `TopologyKind`, `WantSelection`          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod dist;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{RunConfig, TopologyKind, WantSelection};
pub use dist::ServiceDistributions;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, ResourceId};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Tick};
