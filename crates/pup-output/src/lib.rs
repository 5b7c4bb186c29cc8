//! `pup-output` — trace writers for headless yard runs.
//!
//! | Backend | Files created                              |
//! |---------|--------------------------------------------|
//! | CSV     | `pup_snapshots.csv`, `transitions.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by [`TraceObserver`],
//! which implements `pup_sim::YardObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pup_output::{CsvWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./trace"))?;
//! let mut obs = TraceObserver::new(writer);
//! yard.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("trace error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{PupSnapshotRow, TransitionRow};
pub use writer::OutputWriter;
