//! `QueueEventObserver<W>` — bridges `RunObserver` to an `OutputWriter`.

use qs_agent::Population;
use qs_core::{AgentId, ResourceId, Tick};
use qs_sim::RunObserver;

use crate::row::{QueueEventKind, QueueEventRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`RunObserver`] that records every enqueue and completion to any
/// [`OutputWriter`] backend.
///
/// Events are buffered within a tick and written as one batch when the tick
/// ends.  Errors from the writer are stored internally because observer
/// methods have no return value; check [`take_error`][Self::take_error] once
/// the run returns.  The writer is not finished here, so the same writer can
/// go on to export the run's result.
pub struct QueueEventObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<QueueEventRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> QueueEventObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn record(&mut self, tick: Tick, time: f64, kind: QueueEventKind, agent: AgentId, resource: ResourceId) {
        self.pending.push(QueueEventRow {
            tick,
            time,
            kind,
            agent_id: agent.0,
            resource_id: resource.0,
        });
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_events(&self.pending);
        self.pending.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RunObserver for QueueEventObserver<W> {
    fn on_enqueue(&mut self, tick: Tick, time: f64, agent: AgentId, resource: ResourceId) {
        self.record(tick, time, QueueEventKind::Enqueue, agent, resource);
    }

    fn on_complete(&mut self, tick: Tick, time: f64, agent: AgentId, resource: ResourceId) {
        self.record(tick, time, QueueEventKind::Complete, agent, resource);
    }

    fn on_tick_end(&mut self, _tick: Tick, _population: &Population) {
        self.flush_pending();
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        self.flush_pending();
    }
}
