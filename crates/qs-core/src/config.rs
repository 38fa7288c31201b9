//! Run configuration.
//!
//! A [`RunConfig`] fully describes one simulation run: population shape,
//! want-set selection rule, queue topology, clock resolution, seed, and the
//! sampling distributions.  Typically built by the application (CLI flags or
//! a JSON file) and passed to `qs_sim::run`.

use std::fmt;
use std::str::FromStr;

use crate::{AgentId, CoreError, CoreResult, ResourceId, ServiceDistributions};

// ── TopologyKind ──────────────────────────────────────────────────────────────

/// Which queue topology a run uses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TopologyKind {
    /// One queue per resource; agents pick the shortest queue they still want.
    #[default]
    Separate,
    /// One chained queue; every agent walks every resource in index order.
    Single,
}

impl TopologyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TopologyKind::Separate => "separate",
            TopologyKind::Single => "single",
        }
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopologyKind {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "separate" => Ok(TopologyKind::Separate),
            "single" => Ok(TopologyKind::Single),
            other => Err(CoreError::Config(format!(
                "unknown topology {other:?} (expected \"separate\" or \"single\")"
            ))),
        }
    }
}

// ── WantSelection ─────────────────────────────────────────────────────────────

/// How each agent's want-set is drawn.  Produced by [`RunConfig::validate`].
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum WantSelection {
    /// Each resource is wanted independently with its admission probability.
    Probability(f64),
    /// Exactly `n` distinct resources, sampled uniformly without replacement.
    Count(usize),
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for one run.
///
/// Exactly one of `p_want` / `n_want` must be set; [`validate`](Self::validate)
/// rejects everything else before a run starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Number of agents.
    pub agent_count: usize,

    /// Number of resources.
    pub resource_count: usize,

    /// Admission probability given to every resource.
    pub p_want: Option<f64>,

    /// Fixed number of resources each agent wants.
    pub n_want: Option<usize>,

    /// Queue topology.
    pub topology: TopologyKind,

    /// Simulated time per tick.  Default: 0.01.
    pub tick_size: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Abort with a nontermination error after this many ticks.
    pub max_ticks: u64,

    /// Gamma shape for agent and resource speeds.
    pub speed_shape: f64,

    /// Gamma scale for agent and resource speeds.
    pub speed_scale: f64,

    /// LogNormal location of the unscaled service draw.
    pub service_mu: f64,

    /// LogNormal spread of the unscaled service draw.
    pub service_sigma: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            agent_count:    100,
            resource_count: 6,
            p_want:         Some(0.8),
            n_want:         None,
            topology:       TopologyKind::Separate,
            tick_size:      0.01,
            seed:           42,
            max_ticks:      100_000_000,
            speed_shape:    10.0,
            speed_scale:    0.1,
            service_mu:     0.0,
            service_sigma:  1.0,
        }
    }
}

impl RunConfig {
    /// Check the configuration and resolve the want-set selection rule.
    ///
    /// Rejected:
    /// - both or neither of `p_want` / `n_want`;
    /// - `p_want` outside `[0, 1]`;
    /// - `n_want > resource_count`;
    /// - a tick size that is not a finite positive number;
    /// - `max_ticks == 0`;
    /// - the single topology with agents but no resource to queue at;
    /// - more agents or resources than the id types can address;
    /// - invalid speed or service distribution parameters.
    pub fn validate(&self) -> CoreResult<WantSelection> {
        let selection = match (self.p_want, self.n_want) {
            (Some(_), Some(_)) => {
                return Err(CoreError::Config(
                    "p_want and n_want are mutually exclusive; set exactly one".into(),
                ));
            }
            (None, None) => {
                return Err(CoreError::Config(
                    "one of p_want or n_want must be set".into(),
                ));
            }
            (Some(p), None) => {
                if !(0.0..=1.0).contains(&p) {
                    return Err(CoreError::Config(format!(
                        "p_want must lie in [0, 1], got {p}"
                    )));
                }
                WantSelection::Probability(p)
            }
            (None, Some(n)) => {
                if n > self.resource_count {
                    return Err(CoreError::Config(format!(
                        "n_want ({n}) exceeds resource_count ({})",
                        self.resource_count
                    )));
                }
                WantSelection::Count(n)
            }
        };

        if !self.tick_size.is_finite() || self.tick_size <= 0.0 {
            return Err(CoreError::Config(format!(
                "tick_size must be a finite positive number, got {}",
                self.tick_size
            )));
        }
        if self.max_ticks == 0 {
            return Err(CoreError::Config("max_ticks must be at least 1".into()));
        }
        if self.topology == TopologyKind::Single && self.resource_count == 0 && self.agent_count > 0 {
            return Err(CoreError::Config(
                "the single topology needs at least one resource".into(),
            ));
        }
        check_id_space::<AgentId>("agent_count", self.agent_count)?;
        check_id_space::<ResourceId>("resource_count", self.resource_count)?;
        ServiceDistributions::from_config(self)?;

        Ok(selection)
    }
}

/// Reject a count whose ids would not fit the id type.
fn check_id_space<I: TryFrom<usize>>(what: &str, count: usize) -> CoreResult<()> {
    match I::try_from(count) {
        Ok(_) => Ok(()),
        Err(_) => Err(CoreError::Config(format!("{what} ({count}) exceeds the id range"))),
    }
}
