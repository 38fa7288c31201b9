//! A single-server resource ("dish") with a FIFO queue.
//!
//! Invariant: only the queue head may be serving.  `enqueue` starts the
//! agent only if the queue was empty; `poll` starts the next head only after
//! removing the previous one.

use std::collections::VecDeque;

use qs_core::{AgentId, ResourceId};

use crate::{Agent, AgentError, AgentResult};

#[derive(Clone, Debug)]
pub struct Resource {
    pub id: ResourceId,

    /// Service-rate multiplier applied to every visit.
    pub speed: f64,

    /// Probability an agent wants this resource.  Read by scenario setup
    /// only; the scheduler never looks at it.
    pub admission: f64,

    queue: VecDeque<AgentId>,
}

impl Resource {
    pub fn new(id: ResourceId, speed: f64, admission: f64) -> Self {
        Self {
            id,
            speed,
            admission,
            queue: VecDeque::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The agent currently at the head of the queue.
    #[inline]
    pub fn head(&self) -> Option<AgentId> {
        self.queue.front().copied()
    }

    /// Queued agents, head first.
    pub fn iter(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.queue.iter().copied()
    }

    /// Append `agent` to the tail.  If the queue was empty the agent starts
    /// serving at `time` straight away.
    ///
    /// On error neither the queue nor the agent is changed.
    pub fn enqueue(&mut self, agent: AgentId, agents: &mut [Agent], time: f64) -> AgentResult<()> {
        let a = agent_mut(agents, agent)?;
        a.join_queue(self.id)?;
        if self.queue.is_empty() {
            if let Err(e) = a.start_serving(self.id, time) {
                a.abandon_queue();
                return Err(e);
            }
        }
        self.queue.push_back(agent);
        Ok(())
    }

    /// Check the head for completion at `time`.
    ///
    /// Returns the finished agent (already removed from the queue), or `None`
    /// if the queue is empty or the head is still being served.  When an
    /// agent leaves, the next head starts serving at `time`.
    pub fn poll(&mut self, agents: &mut [Agent], time: f64) -> AgentResult<Option<AgentId>> {
        let Some(head) = self.head() else {
            return Ok(None);
        };

        let a = agent_mut(agents, head)?;
        if !a.check_done(time)? {
            return Ok(None);
        }
        a.leave_queue();
        self.queue.pop_front();

        if let Some(next) = self.head() {
            agent_mut(agents, next)?.start_serving(self.id, time)?;
        }
        Ok(Some(head))
    }
}

fn agent_mut(agents: &mut [Agent], id: AgentId) -> AgentResult<&mut Agent> {
    agents.get_mut(id.index()).ok_or(AgentError::AgentNotFound(id))
}
