//! Fluent builder that draws a random scenario into a [`Population`].
//!
//! # Draw order
//!
//! 1. Resource speeds, in id order, from one `SimRng(seed)`.
//! 2. For each agent, from its own `AgentRng(seed, id)`:
//!    want-set, then personal speed, then one service draw per wanted
//!    resource in want-set order.
//!
//! # Usage
//!
//! ```rust
//! use qs_agent::PopulationBuilder;
//! use qs_core::RunConfig;
//!
//! let pop = PopulationBuilder::from_config(&RunConfig::default())
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! assert_eq!(pop.agents.len(), 100);
//! assert_eq!(pop.resources.len(), 6);
//! ```

use qs_core::{
    AgentId, AgentRng, CoreError, ResourceId, RunConfig, ServiceDistributions, SimRng,
    WantSelection,
};

use crate::{Agent, AgentResult, Population, Resource};

pub struct PopulationBuilder {
    agent_count:    usize,
    resource_count: usize,
    seed:           u64,
    selection:      WantSelection,
    dists:          ServiceDistributions,
}

impl PopulationBuilder {
    /// Create a builder with explicit sizes, seed, selection rule, and
    /// distributions.
    pub fn new(
        agent_count:    usize,
        resource_count: usize,
        seed:           u64,
        selection:      WantSelection,
        dists:          ServiceDistributions,
    ) -> Self {
        Self { agent_count, resource_count, seed, selection, dists }
    }

    /// Validate `config` and take every parameter from it.
    pub fn from_config(config: &RunConfig) -> AgentResult<Self> {
        let selection = config.validate()?;
        let dists = ServiceDistributions::from_config(config)?;
        Ok(Self::new(
            config.agent_count,
            config.resource_count,
            config.seed,
            selection,
            dists,
        ))
    }

    /// Draw every resource and agent.
    pub fn build(self) -> AgentResult<Population> {
        let resource_count = ResourceId::try_from(self.resource_count)
            .map_err(|_| id_range("resource_count", self.resource_count))?;
        let agent_count = AgentId::try_from(self.agent_count)
            .map_err(|_| id_range("agent_count", self.agent_count))?;

        if let WantSelection::Count(n) = self.selection {
            if n > self.resource_count {
                return Err(CoreError::Config(format!(
                    "cannot want {n} of {} resources",
                    self.resource_count
                ))
                .into());
            }
        }

        let mut sim_rng = SimRng::new(self.seed);
        let admission = match self.selection {
            WantSelection::Probability(p) => p,
            WantSelection::Count(_) if self.resource_count == 0 => 0.0,
            WantSelection::Count(n) => n as f64 / self.resource_count as f64,
        };

        let resources: Vec<Resource> = (0..resource_count.0)
            .map(|i| Resource::new(ResourceId(i), self.dists.speed(sim_rng.inner()), admission))
            .collect();

        let agents = (0..agent_count.0)
            .map(|i| self.draw_agent(AgentId(i), &resources))
            .collect::<AgentResult<Vec<_>>>()?;

        Population::new(resources, agents)
    }

    fn draw_agent(&self, id: AgentId, resources: &[Resource]) -> AgentResult<Agent> {
        let mut rng = AgentRng::new(self.seed, id);

        let wants: Vec<&Resource> = match self.selection {
            WantSelection::Probability(_) => resources
                .iter()
                .filter(|r| rng.unit() < r.admission)
                .collect(),
            WantSelection::Count(n) => rng
                .sample_indices(resources.len(), n)
                .into_iter()
                .map(|i| &resources[i])
                .collect(),
        };

        let speed = self.dists.speed(rng.inner());
        let durations = wants
            .into_iter()
            .map(|r| (r.id, self.dists.service(rng.inner()) * speed * r.speed))
            .collect();

        Agent::new(id, speed, durations)
    }
}

fn id_range(what: &str, count: usize) -> CoreError {
    CoreError::Config(format!("{what} ({count}) exceeds the id range"))
}
