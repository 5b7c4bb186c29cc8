//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PupSnapshotRow, TransitionRow};

/// Trait implemented by trace writers.
///
/// Errors surface to the observer, which stores the first one for
/// [`TraceObserver::take_error`][crate::TraceObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of pup snapshots.
    fn write_snapshots(&mut self, rows: &[PupSnapshotRow]) -> OutputResult<()>;

    /// Write a batch of transitions.
    fn write_transitions(&mut self, rows: &[TransitionRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
