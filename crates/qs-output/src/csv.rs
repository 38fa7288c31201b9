//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `agents.csv`
//! - `resources.csv`
//! - `queue_events.csv`
//!
//! Unset values (an aborted agent's completion time) are written as empty
//! fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentRow, OutputResult, QueueEventRow, ResourceRow};

pub const AGENT_HEADERS: [&str; 9] = [
    "run_id", "topology", "agent_id", "speed", "wanted", "service_time", "completed_at", "wait_time",
    "visited",
];
pub const RESOURCE_HEADERS: [&str; 5] = ["run_id", "resource_id", "speed", "admission", "queue_empty"];
pub const EVENT_HEADERS: [&str; 5] = ["tick", "time", "kind", "agent_id", "resource_id"];

/// Writes run output to three CSV files.
pub struct CsvWriter {
    agents:    Writer<File>,
    resources: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut agents = Writer::from_path(dir.join("agents.csv"))?;
        agents.write_record(AGENT_HEADERS)?;

        let mut resources = Writer::from_path(dir.join("resources.csv"))?;
        resources.write_record(RESOURCE_HEADERS)?;

        let mut events = Writer::from_path(dir.join("queue_events.csv"))?;
        events.write_record(EVENT_HEADERS)?;

        Ok(Self {
            agents,
            resources,
            events,
            finished: false,
        })
    }
}

fn opt(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()> {
        for row in rows {
            let visited: Vec<String> = row.visited.iter().map(u32::to_string).collect();
            self.agents.write_record(&[
                row.run_id.to_string(),
                row.topology.to_string(),
                row.agent_id.to_string(),
                row.speed.to_string(),
                row.wanted.to_string(),
                row.service_time.to_string(),
                opt(row.completed_at),
                opt(row.wait_time),
                visited.join(";"),
            ])?;
        }
        Ok(())
    }

    fn write_resources(&mut self, rows: &[ResourceRow]) -> OutputResult<()> {
        for row in rows {
            self.resources.write_record(&[
                row.run_id.to_string(),
                row.resource_id.to_string(),
                row.speed.to_string(),
                row.admission.to_string(),
                (row.queue_empty as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_events(&mut self, rows: &[QueueEventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.tick.0.to_string(),
                row.time.to_string(),
                row.kind.to_string(),
                row.agent_id.to_string(),
                row.resource_id.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.agents.flush()?;
        self.resources.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
