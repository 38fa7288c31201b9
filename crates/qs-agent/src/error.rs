use qs_core::{AgentId, CoreError, ResourceId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AgentError {
    #[error("{agent}: cannot {operation} while {found} (expected {expected})")]
    InvalidState {
        agent:     AgentId,
        operation: &'static str,
        expected:  &'static str,
        found:     &'static str,
    },

    #[error("{agent} is already queued at {resource}")]
    AlreadyQueued {
        agent:    AgentId,
        resource: ResourceId,
    },

    #[error("{0} not found")]
    AgentNotFound(AgentId),

    #[error("{0} not found")]
    ResourceNotFound(ResourceId),

    #[error("{agent} wants {resource} more than once")]
    DuplicateWant {
        agent:    AgentId,
        resource: ResourceId,
    },

    #[error("{what} at position {position} carries id {found}")]
    IdMismatch {
        what:     &'static str,
        position: usize,
        found:    u32,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type AgentResult<T> = Result<T, AgentError>;
