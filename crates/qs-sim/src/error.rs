use qs_agent::AgentError;
use qs_core::{AgentId, CoreError};
use thiserror::Error;

use crate::RunResult;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// A routing or queue bug: an agent was asked to do something its
    /// current state forbids.
    #[error(transparent)]
    Agent(#[from] AgentError),

    /// The queues never drained.  `partial` is the state at abort time;
    /// unfinished agents have no completion time.
    #[error("run did not terminate within {ticks} ticks ({queued} agents still queued)")]
    NonTermination {
        ticks:   u64,
        queued:  usize,
        partial: Box<RunResult>,
    },

    /// Every queue drained while an agent still had outstanding wants, so
    /// no routing rule will ever reach them.
    #[error("queues drained but {agent} still wants {remaining} resource(s)")]
    Stranded {
        agent:     AgentId,
        remaining: usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
