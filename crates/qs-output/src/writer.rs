//! The `OutputWriter` trait implemented by all backend writers.

use qs_sim::RunResult;

use crate::{AgentRow, OutputResult, QueueEventRow, ResourceRow};

/// Trait implemented by export backends.
pub trait OutputWriter {
    /// Write a batch of agent rows.
    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()>;

    /// Write a batch of resource rows.
    fn write_resources(&mut self, rows: &[ResourceRow]) -> OutputResult<()>;

    /// Write a batch of queue events.
    fn write_events(&mut self, rows: &[QueueEventRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write every agent and resource row of `result` under `run_id`.
pub fn export_run<W: OutputWriter>(writer: &mut W, run_id: u32, result: &RunResult) -> OutputResult<()> {
    let agents: Vec<AgentRow> = result
        .agents
        .iter()
        .map(|a| AgentRow::from_outcome(run_id, result.topology, a))
        .collect();
    let resources: Vec<ResourceRow> = result
        .resources
        .iter()
        .map(|r| ResourceRow::from_outcome(run_id, r))
        .collect();
    writer.write_agents(&agents)?;
    writer.write_resources(&resources)
}
