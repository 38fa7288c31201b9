//! `Population` — the agent and resource arenas for one run.
//!
//! Both arenas are plain `Vec`s indexed by `AgentId` / `ResourceId`.  Every
//! element's id equals its position; [`Population::new`] checks this once so
//! the rest of the crate can index without re-validating.

use qs_core::{AgentId, ResourceId};

use crate::{Agent, AgentError, AgentResult, Resource};

#[derive(Clone, Debug)]
pub struct Population {
    pub resources: Vec<Resource>,
    pub agents:    Vec<Agent>,
}

impl Population {
    /// Assemble a population from hand-built parts.
    ///
    /// # Errors
    /// `IdMismatch` if an id does not equal its position, and
    /// `ResourceNotFound` if an agent wants a resource that does not exist.
    pub fn new(resources: Vec<Resource>, agents: Vec<Agent>) -> AgentResult<Self> {
        for (position, r) in resources.iter().enumerate() {
            if r.id.index() != position {
                return Err(AgentError::IdMismatch { what: "resource", position, found: r.id.0 });
            }
        }
        for (position, a) in agents.iter().enumerate() {
            if a.id.index() != position {
                return Err(AgentError::IdMismatch { what: "agent", position, found: a.id.0 });
            }
            if let Some(&missing) = a.wants().iter().find(|r| r.index() >= resources.len()) {
                return Err(AgentError::ResourceNotFound(missing));
            }
        }
        Ok(Self { resources, agents })
    }

    #[inline]
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    #[inline]
    pub fn resource(&self, id: ResourceId) -> Option<&Resource> {
        self.resources.get(id.index())
    }

    /// `true` when no resource has anyone queued.
    pub fn all_queues_empty(&self) -> bool {
        self.resources.iter().all(Resource::is_empty)
    }

    /// Total number of agents currently queued anywhere.
    pub fn queued(&self) -> usize {
        self.resources.iter().map(Resource::len).sum()
    }

    /// Enqueue `agent` at `resource` at `time`.
    pub fn enqueue(&mut self, resource: ResourceId, agent: AgentId, time: f64) -> AgentResult<()> {
        let r = self
            .resources
            .get_mut(resource.index())
            .ok_or(AgentError::ResourceNotFound(resource))?;
        r.enqueue(agent, &mut self.agents, time)
    }

    /// Poll `resource` at `time`; see [`Resource::poll`].
    pub fn poll(&mut self, resource: ResourceId, time: f64) -> AgentResult<Option<AgentId>> {
        let r = self
            .resources
            .get_mut(resource.index())
            .ok_or(AgentError::ResourceNotFound(resource))?;
        r.poll(&mut self.agents, time)
    }

    /// Separate-queues choice for `agent`: its shortest wanted queue.
    pub fn choose_next(&self, agent: AgentId) -> AgentResult<Option<ResourceId>> {
        let a = self.agent(agent).ok_or(AgentError::AgentNotFound(agent))?;
        Ok(a.choose_next(&self.resources))
    }
}
