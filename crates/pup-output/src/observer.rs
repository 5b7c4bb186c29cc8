//! `TraceObserver<W>` — bridges `YardObserver` to an `OutputWriter`.

use pup_core::{PupId, Tick};
use pup_sim::{Pup, TransitionEvent, YardObserver};

use crate::row::{PupSnapshotRow, TransitionRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`YardObserver`] that writes pup snapshots and transitions to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `YardObserver`
/// methods have no return value.  After `yard.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `yard.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
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

impl<W: OutputWriter> YardObserver for TraceObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, transitions: &[TransitionEvent]) {
        if transitions.is_empty() {
            return;
        }
        let rows: Vec<TransitionRow> = transitions
            .iter()
            .map(|t| TransitionRow {
                pup_id: t.pup.0,
                tick:   tick.0,
                from:   t.from,
                to:     t.to,
            })
            .collect();
        let result = self.writer.write_transitions(&rows);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, pups: &[Pup]) {
        let rows: Vec<PupSnapshotRow> = pups
            .iter()
            .enumerate()
            .filter_map(|(i, pup)| {
                let pup_id = PupId::try_from(i).ok()?;
                let state = pup.state_kind()?;
                let position = pup.position();
                Some(PupSnapshotRow {
                    pup_id:    pup_id.0,
                    tick:      tick.0,
                    state,
                    x:         position.x,
                    y:         position.y,
                    facing:    pup.facing(),
                    animation: pup.animation().raised(),
                })
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
