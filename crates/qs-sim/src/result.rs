//! `RunResult` — everything a consumer needs from one finished run.

use qs_agent::{Agent, Population, Resource};
use qs_core::{AgentId, ResourceId, TopologyKind};

/// Per-agent outcome.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentOutcome {
    pub id:           AgentId,
    pub speed:        f64,
    /// Want-set at construction, in choice order.
    pub wanted:       Vec<ResourceId>,
    /// Every resource the agent was enqueued at, in order.
    pub visited:      Vec<ResourceId>,
    /// Sum of the agent's precomputed service durations.
    pub service_time: f64,
    /// Time the want-set emptied.  `None` if the run was aborted first.
    pub completed_at: Option<f64>,
}

impl AgentOutcome {
    fn from_agent(agent: &Agent) -> Self {
        Self {
            id:           agent.id,
            speed:        agent.speed,
            wanted:       agent.wanted().to_vec(),
            visited:      agent.visited().to_vec(),
            service_time: agent.service_time(),
            completed_at: agent.completed_at(),
        }
    }

    /// Completion time minus pure service time.
    pub fn wait_time(&self) -> Option<f64> {
        self.completed_at.map(|t| t - self.service_time)
    }
}

/// Per-resource outcome.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceOutcome {
    pub id:          ResourceId,
    pub speed:       f64,
    pub admission:   f64,
    pub queue_empty: bool,
}

impl ResourceOutcome {
    fn from_resource(resource: &Resource) -> Self {
        Self {
            id:          resource.id,
            speed:       resource.speed,
            admission:   resource.admission,
            queue_empty: resource.is_empty(),
        }
    }
}

/// The outcome of one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    pub topology:  TopologyKind,
    /// Seed the population was drawn from; `None` for hand-built populations.
    pub seed:      Option<u64>,
    pub tick_size: f64,
    /// Number of full scheduler passes executed.
    pub ticks:     u64,
    /// Simulated time of the last pass (0 if none ran).
    pub end_time:  f64,
    pub agents:    Vec<AgentOutcome>,
    pub resources: Vec<ResourceOutcome>,
}

impl RunResult {
    pub(crate) fn capture(
        topology:   TopologyKind,
        seed:       Option<u64>,
        tick_size:  f64,
        ticks:      u64,
        population: &Population,
    ) -> Self {
        let end_time = match ticks {
            0 => 0.0,
            n => (n - 1) as f64 * tick_size,
        };
        Self {
            topology,
            seed,
            tick_size,
            ticks,
            end_time,
            agents:    population.agents.iter().map(AgentOutcome::from_agent).collect(),
            resources: population.resources.iter().map(ResourceOutcome::from_resource).collect(),
        }
    }

    /// `true` if every agent has a completion time.
    pub fn all_completed(&self) -> bool {
        self.agents.iter().all(|a| a.completed_at.is_some())
    }

    /// Completion times of finished agents, in agent id order.
    pub fn completion_times(&self) -> impl Iterator<Item = f64> + '_ {
        self.agents.iter().filter_map(|a| a.completed_at)
    }

    pub fn agent(&self, id: AgentId) -> Option<&AgentOutcome> {
        self.agents.get(id.index())
    }
}
