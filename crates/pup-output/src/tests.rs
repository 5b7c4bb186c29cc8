//! Integration tests for pup-output.

#[cfg(test)]
mod csv_tests {
    use pup_behavior::{AnimationFlags, StateKind};
    use pup_core::{Facing, SimConfig};
    use pup_sim::YardBuilder;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_FILE, TRANSITION_FILE};
    use crate::observer::TraceObserver;
    use crate::row::{PupSnapshotRow, TransitionRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(pup_id: u32, tick: u64) -> PupSnapshotRow {
        PupSnapshotRow {
            pup_id,
            tick,
            state:     StateKind::Wander,
            x:         0.25,
            y:         -1.5,
            facing:    Facing::Right,
            animation: AnimationFlags::WALKING,
        }
    }

    fn read_records(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(SNAPSHOT_FILE).exists());
        assert!(dir.path().join(TRANSITION_FILE).exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(SNAPSHOT_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOT_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["pup_id", "tick", "state", "x", "y", "facing", "animation"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join(TRANSITION_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["pup_id", "tick", "from", "to"]);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let mut sitting = snap_row(1, 5);
        sitting.state = StateKind::Sit;
        sitting.facing = Facing::Left;
        sitting.animation = AnimationFlags::SITTING;
        let mut blank = snap_row(2, 5);
        blank.animation = AnimationFlags::empty();
        w.write_snapshots(&[snap_row(0, 5), sitting, blank]).unwrap();
        w.finish().unwrap();

        let rows = read_records(dir.path().join(SNAPSHOT_FILE));
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "0");       // pup_id
        assert_eq!(&rows[0][1], "5");       // tick
        assert_eq!(&rows[0][2], "wander");
        assert_eq!(&rows[0][3], "0.2500");
        assert_eq!(&rows[0][4], "-1.5000");
        assert_eq!(&rows[0][5], "right");
        assert_eq!(&rows[0][6], "walking");
        assert_eq!(&rows[1][2], "sit");
        assert_eq!(&rows[1][5], "left");
        assert_eq!(&rows[1][6], "sitting");
        assert_eq!(&rows[2][6], "none");
    }

    #[test]
    fn csv_transition_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_transitions(&[
            TransitionRow { pup_id: 3, tick: 12, from: StateKind::Idle,   to: StateKind::Wander },
            TransitionRow { pup_id: 4, tick: 12, from: StateKind::Wander, to: StateKind::Relieve },
        ])
        .unwrap();
        w.finish().unwrap();

        let rows = read_records(dir.path().join(TRANSITION_FILE));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "12");
        assert_eq!(&rows[0][2], "idle");
        assert_eq!(&rows[0][3], "wander");
        assert_eq!(&rows[1][3], "relieve");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_batches_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
        w.write_transitions(&[]).unwrap();
    }

    fn run_to_csv(dir: &std::path::Path, seed: u64) {
        let config = SimConfig {
            dt_secs:                 0.1,
            total_ticks:             3_000,
            seed,
            num_threads:             Some(1),
            snapshot_interval_ticks: 500,
        };
        let mut yard = YardBuilder::new(config).pups(3).build().unwrap();
        let writer = CsvWriter::new(dir).unwrap();
        let mut obs = TraceObserver::new(writer);
        yard.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");
    }

    #[test]
    fn integration_csv() {
        let dir = tmp();
        run_to_csv(dir.path(), 1);

        // interval = 500 over 3000 ticks → snapshots at 0, 500, …, 2500 (6 × 3 pups)
        let snaps = read_records(dir.path().join(SNAPSHOT_FILE));
        assert_eq!(snaps.len(), 18, "expected 6 ticks × 3 pups, got {}", snaps.len());
        // Tick 0 is the entry tick: a pup is idling unless it already
        // decided to wander, in which case Idle's exit cleared the intent.
        for row in &snaps[..3] {
            assert_eq!(&row[1], "0");
            match &row[2] {
                "idle"   => assert_eq!(&row[6], "idling"),
                "wander" => assert_eq!(&row[6], "none"),
                other    => panic!("unexpected state at tick 0: {other}"),
            }
        }

        let transitions = read_records(dir.path().join(TRANSITION_FILE));
        for row in &transitions {
            assert_ne!(&row[2], &row[3]);
        }
    }

    #[test]
    fn same_seed_same_trace() {
        let (a, b) = (tmp(), tmp());
        run_to_csv(a.path(), 77);
        run_to_csv(b.path(), 77);
        for file in [SNAPSHOT_FILE, TRANSITION_FILE] {
            let left = std::fs::read_to_string(a.path().join(file)).unwrap();
            let right = std::fs::read_to_string(b.path().join(file)).unwrap();
            assert_eq!(left, right, "{file} differs");
        }
    }
}

// ── Observer error capture ────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use pup_core::{SimConfig, Tick};
    use pup_sim::{YardBuilder, YardObserver};

    use crate::observer::TraceObserver;
    use crate::row::{PupSnapshotRow, TransitionRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    /// Writer whose snapshot writes always fail.
    #[derive(Default)]
    struct FailingWriter {
        snapshot_calls: usize,
        finish_calls:   usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[PupSnapshotRow]) -> OutputResult<()> {
            self.snapshot_calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("disk full #{}", self.snapshot_calls))))
        }
        fn write_transitions(&mut self, _rows: &[TransitionRow]) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finish_calls += 1;
            Ok(())
        }
    }

    #[test]
    fn first_error_kept_and_run_continues() {
        let config = SimConfig {
            dt_secs:                 0.1,
            total_ticks:             10,
            seed:                    3,
            num_threads:             Some(1),
            snapshot_interval_ticks: 2,
        };
        let mut yard = YardBuilder::new(config).pups(2).build().unwrap();
        let mut obs = TraceObserver::new(FailingWriter::default());
        yard.run(&mut obs).unwrap();

        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("disk full #1"), "got {err}");
        assert!(obs.take_error().is_none(), "take_error empties the slot");

        let writer = obs.into_writer();
        assert_eq!(writer.snapshot_calls, 5);
        assert_eq!(writer.finish_calls, 1);
    }

    #[test]
    fn empty_tick_writes_nothing() {
        let mut obs = TraceObserver::new(FailingWriter::default());
        obs.on_snapshot(Tick(0), &[]);
        obs.on_tick_end(Tick(0), &[]);
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().snapshot_calls, 0);
    }
}
