//! Plain data row types written by output backends.

use std::fmt;

use qs_core::{Tick, TopologyKind};
use qs_sim::{AgentOutcome, ResourceOutcome};

/// One agent's outcome in one run.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRow {
    pub run_id:       u32,
    pub topology:     TopologyKind,
    pub agent_id:     u32,
    pub speed:        f64,
    /// Size of the want-set at construction.
    pub wanted:       usize,
    pub service_time: f64,
    pub completed_at: Option<f64>,
    pub wait_time:    Option<f64>,
    /// Visited resource ids in order.
    pub visited:      Vec<u32>,
}

impl AgentRow {
    pub fn from_outcome(run_id: u32, topology: TopologyKind, outcome: &AgentOutcome) -> Self {
        Self {
            run_id,
            topology,
            agent_id:     outcome.id.0,
            speed:        outcome.speed,
            wanted:       outcome.wanted.len(),
            service_time: outcome.service_time,
            completed_at: outcome.completed_at,
            wait_time:    outcome.wait_time(),
            visited:      outcome.visited.iter().map(|r| r.0).collect(),
        }
    }
}

/// One resource's outcome in one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceRow {
    pub run_id:      u32,
    pub resource_id: u32,
    pub speed:       f64,
    pub admission:   f64,
    pub queue_empty: bool,
}

impl ResourceRow {
    pub fn from_outcome(run_id: u32, outcome: &ResourceOutcome) -> Self {
        Self {
            run_id,
            resource_id: outcome.id.0,
            speed:       outcome.speed,
            admission:   outcome.admission,
            queue_empty: outcome.queue_empty,
        }
    }
}

/// What happened in a [`QueueEventRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueEventKind {
    Enqueue,
    Complete,
}

impl fmt::Display for QueueEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QueueEventKind::Enqueue => "enqueue",
            QueueEventKind::Complete => "complete",
        })
    }
}

/// One queue event observed during a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueEventRow {
    pub tick:        Tick,
    pub time:        f64,
    pub kind:        QueueEventKind,
    pub agent_id:    u32,
    pub resource_id: u32,
}
