//! The agent service state machine.
//!
//! ```text
//!            start_serving              check_done == true
//!   Idle ─────────────────▶ Serving ──────────────────────▶ Idle   (wants left)
//!    ▲                        │                        └──▶ Done   (want-set emptied)
//!    │                        │ check_done == false
//!    │                        └──▶ Serving (unchanged)
//!   Done ── start_serving ──▶ Serving ── check_done ──▶ Done
//! ```
//!
//! The last row only happens under the single-chain topology, which walks
//! every agent past every resource whether it wants it or not.

use qs_core::{AgentId, ResourceId};
use rustc_hash::FxHashMap;

use crate::{AgentError, AgentResult, Resource};

// ── AgentState ────────────────────────────────────────────────────────────────

/// Where an agent is in its service lifecycle.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    /// Not at a queue head and still has outstanding wants.
    Idle,
    /// Occupying the head of `resource`'s queue since time `since`.
    Serving { resource: ResourceId, since: f64 },
    /// Want-set is empty.  Terminal for routing purposes.
    Done,
}

impl AgentState {
    pub fn name(self) -> &'static str {
        match self {
            AgentState::Idle => "idle",
            AgentState::Serving { .. } => "serving",
            AgentState::Done => "done",
        }
    }

    #[inline]
    pub fn is_serving(self) -> bool {
        matches!(self, AgentState::Serving { .. })
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One agent ("person") and everything it needs to decide when it is done.
///
/// Service durations are fixed at construction, one per wanted resource, so
/// a run replays identically from the same draws.
#[derive(Clone, Debug)]
pub struct Agent {
    pub id: AgentId,

    /// Personal speed multiplier.
    pub speed: f64,

    /// Resources still wanted, in the order they were chosen.  Only ever
    /// shrinks.
    wants: Vec<ResourceId>,

    /// The want-set as it was at construction.
    wanted: Vec<ResourceId>,

    /// Precomputed service duration per wanted resource.
    durations: FxHashMap<ResourceId, f64>,

    state: AgentState,

    /// Resource whose queue the agent is currently in, serving or waiting.
    queued_at: Option<ResourceId>,

    /// Time at which the want-set became empty.
    completed_at: Option<f64>,

    /// Every resource the agent has been enqueued at, in order.
    visited: Vec<ResourceId>,
}

impl Agent {
    /// Create an agent from `(resource, duration)` pairs in want-set order.
    ///
    /// An agent that wants nothing starts `Done` with a completion time of 0.
    pub fn new(id: AgentId, speed: f64, wants: Vec<(ResourceId, f64)>) -> AgentResult<Self> {
        let mut durations = FxHashMap::default();
        let mut order = Vec::with_capacity(wants.len());
        for (resource, duration) in wants {
            if durations.insert(resource, duration).is_some() {
                return Err(AgentError::DuplicateWant { agent: id, resource });
            }
            order.push(resource);
        }

        let (state, completed_at) = if order.is_empty() {
            (AgentState::Done, Some(0.0))
        } else {
            (AgentState::Idle, None)
        };

        Ok(Self {
            id,
            speed,
            wanted: order.clone(),
            wants: order,
            durations,
            state,
            queued_at: None,
            completed_at,
            visited: Vec::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> AgentState {
        self.state
    }

    /// Remaining want-set.
    #[inline]
    pub fn wants(&self) -> &[ResourceId] {
        &self.wants
    }

    /// Want-set at construction.
    #[inline]
    pub fn wanted(&self) -> &[ResourceId] {
        &self.wanted
    }

    #[inline]
    pub fn visited(&self) -> &[ResourceId] {
        &self.visited
    }

    #[inline]
    pub fn queued_at(&self) -> Option<ResourceId> {
        self.queued_at
    }

    #[inline]
    pub fn completed_at(&self) -> Option<f64> {
        self.completed_at
    }

    /// Precomputed service duration at `resource`, if the agent wanted it.
    #[inline]
    pub fn duration_at(&self, resource: ResourceId) -> Option<f64> {
        self.durations.get(&resource).copied()
    }

    /// Total time spent actually being served (sum of wanted durations).
    pub fn service_time(&self) -> f64 {
        self.wanted
            .iter()
            .filter_map(|r| self.duration_at(*r))
            .fold(0.0, |total, d| total + d)
    }

    /// Time spent waiting in line: completion time minus service time.
    /// `None` until the agent completes.
    pub fn wait_time(&self) -> Option<f64> {
        self.completed_at.map(|t| t - self.service_time())
    }

    // ── Queue membership (driven by `Resource`) ───────────────────────────

    pub(crate) fn join_queue(&mut self, resource: ResourceId) -> AgentResult<()> {
        if let Some(current) = self.queued_at {
            return Err(AgentError::AlreadyQueued { agent: self.id, resource: current });
        }
        self.queued_at = Some(resource);
        self.visited.push(resource);
        Ok(())
    }

    pub(crate) fn leave_queue(&mut self) {
        self.queued_at = None;
    }

    /// Roll back the last `join_queue` when the enqueue it belonged to failed.
    pub(crate) fn abandon_queue(&mut self) {
        self.queued_at = None;
        self.visited.pop();
    }

    // ── State machine ─────────────────────────────────────────────────────

    /// Begin service at the head of `resource`'s queue.
    ///
    /// # Errors
    /// `InvalidState` if the agent is already serving.
    pub fn start_serving(&mut self, resource: ResourceId, time: f64) -> AgentResult<()> {
        if self.state.is_serving() {
            return Err(self.invalid("start serving", "idle or done"));
        }
        self.state = AgentState::Serving { resource, since: time };
        Ok(())
    }

    /// Has the agent finished at its current resource as of `time`?
    ///
    /// On completion the serving state is cleared and the resource leaves the
    /// want-set.  A resource with no precomputed duration completes at once
    /// and leaves the want-set untouched.
    ///
    /// # Errors
    /// `InvalidState` if the agent is not serving.
    pub fn check_done(&mut self, time: f64) -> AgentResult<bool> {
        let AgentState::Serving { resource, since } = self.state else {
            return Err(self.invalid("check completion", "serving"));
        };

        match self.duration_at(resource) {
            None => {
                self.state = self.resting_state();
                Ok(true)
            }
            Some(duration) if time - since >= duration => {
                self.wants.retain(|r| *r != resource);
                if self.wants.is_empty() && self.completed_at.is_none() {
                    self.completed_at = Some(time);
                }
                self.state = self.resting_state();
                Ok(true)
            }
            Some(_) => Ok(false),
        }
    }

    /// Greedy join-shortest-queue choice among the remaining wants.
    ///
    /// Ties go to the first resource in want-set order.  `None` once the
    /// want-set is empty.
    pub fn choose_next(&self, resources: &[Resource]) -> Option<ResourceId> {
        self.wants
            .iter()
            .filter_map(|&id| resources.get(id.index()).map(|r| (id, r.len())))
            .min_by_key(|&(_, len)| len)
            .map(|(id, _)| id)
    }

    fn resting_state(&self) -> AgentState {
        if self.wants.is_empty() {
            AgentState::Done
        } else {
            AgentState::Idle
        }
    }

    fn invalid(&self, operation: &'static str, expected: &'static str) -> AgentError {
        AgentError::InvalidState {
            agent: self.id,
            operation,
            expected,
            found: self.state.name(),
        }
    }
}
