//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `pup_snapshots.csv`
//! - `transitions.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PupSnapshotRow, TransitionRow};

pub const SNAPSHOT_FILE:   &str = "pup_snapshots.csv";
pub const TRANSITION_FILE: &str = "transitions.csv";

/// Writes a yard trace to two CSV files.
pub struct CsvWriter {
    snapshots:   Writer<File>,
    transitions: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files in it and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record(["pup_id", "tick", "state", "x", "y", "facing", "animation"])?;

        let mut transitions = Writer::from_path(dir.join(TRANSITION_FILE))?;
        transitions.write_record(["pup_id", "tick", "from", "to"])?;

        Ok(Self {
            snapshots,
            transitions,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[PupSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.pup_id.to_string(),
                row.tick.to_string(),
                row.state.name().to_owned(),
                format!("{:.4}", row.x),
                format!("{:.4}", row.y),
                row.facing.to_string(),
                row.animation.label(),
            ])?;
        }
        Ok(())
    }

    fn write_transitions(&mut self, rows: &[TransitionRow]) -> OutputResult<()> {
        for row in rows {
            self.transitions.write_record(&[
                row.pup_id.to_string(),
                row.tick.to_string(),
                row.from.name().to_owned(),
                row.to.name().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.transitions.flush()?;
        Ok(())
    }
}
