//! `qs-output` — export writers for `rust_qsim` runs.
//!
//! Everything here consumes finished [`qs_sim::RunResult`]s or loop events;
//! nothing feeds back into the simulation.
//!
//! | File                | Rows                                                    |
//! |---------------------|---------------------------------------------------------|
//! | `agents.csv`        | one per agent per run (speed, wants, completion, wait)  |
//! | `resources.csv`     | one per resource per run                                |
//! | `queue_events.csv`  | one per enqueue / completion (via `QueueEventObserver`) |
//!
//! # Usage
//!
//! ```rust,ignore
//! use qs_output::{CsvWriter, OutputWriter, QueueEventObserver, export_run};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = QueueEventObserver::new(writer);
//! let result = qs_sim::run_observed(&config, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! let mut writer = obs.into_writer();
//! export_run(&mut writer, 0, &result)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::QueueEventObserver;
pub use row::{AgentRow, QueueEventKind, QueueEventRow, ResourceRow};
pub use writer::{OutputWriter, export_run};
