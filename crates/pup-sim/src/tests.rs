//! Integration tests for pup-sim.

use pup_behavior::{AnimationIntent, AnimationSignal, BehaviorError, StateKind};
use pup_core::{Position, PupId, PupRng, SimConfig, Tick};

use crate::{NoopObserver, Pup, SimError, TransitionEvent, YardBuilder, YardObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        dt_secs:                 0.1,
        total_ticks,
        seed:                    42,
        num_threads:             Some(1),
        snapshot_interval_ticks: total_ticks,
    }
}

/// Observer that records everything it is shown.
#[derive(Default)]
struct Recorder {
    starts:      Vec<Tick>,
    ends:        usize,
    transitions: Vec<(Tick, TransitionEvent)>,
    snapshots:   Vec<(Tick, usize)>,
    signals:     Vec<(Tick, PupId, Vec<AnimationSignal>)>,
    end_tick:    Option<Tick>,
}

impl YardObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }
    fn on_tick_end(&mut self, tick: Tick, transitions: &[TransitionEvent]) {
        self.ends += 1;
        self.transitions.extend(transitions.iter().map(|&t| (tick, t)));
    }
    fn on_signals(&mut self, tick: Tick, pup: PupId, signals: &[AnimationSignal]) {
        self.signals.push((tick, pup, signals.to_vec()));
    }
    fn on_snapshot(&mut self, tick: Tick, pups: &[Pup]) {
        self.snapshots.push((tick, pups.len()));
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.end_tick = Some(final_tick);
    }
}

// ── YardBuilder validation ────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_initialized_pups_at_origin() {
        let yard = YardBuilder::new(test_config(10)).pups(3).build().unwrap();
        assert_eq!(yard.pup_count(), 3);
        for pup in &yard.pups {
            assert!(pup.is_initialized());
            assert_eq!(pup.state_kind(), Some(StateKind::Idle));
            assert_eq!(pup.position(), Position::ORIGIN);
        }
    }

    #[test]
    fn default_is_one_pup() {
        let yard = YardBuilder::new(test_config(10)).build().unwrap();
        assert_eq!(yard.pup_count(), 1);
    }

    #[test]
    fn start_positions_applied() {
        let starts = vec![Position::planar(1.0, 0.0), Position::planar(-2.0, 3.0)];
        let yard = YardBuilder::new(test_config(10))
            .pups(2)
            .start_positions(starts.clone())
            .build()
            .unwrap();
        assert_eq!(yard.pup(PupId(0)).unwrap().position(), starts[0]);
        assert_eq!(yard.pup(PupId(1)).unwrap().position(), starts[1]);
        assert!(yard.pup(PupId(2)).is_none());
    }

    #[test]
    fn position_count_mismatch_errors() {
        let result = YardBuilder::new(test_config(10))
            .pups(3)
            .start_positions(vec![Position::ORIGIN; 2])
            .build();
        assert!(matches!(
            result,
            Err(SimError::PupCountMismatch { expected: 3, got: 2, .. })
        ));
    }

    #[test]
    fn non_finite_start_position_rejected() {
        let result = YardBuilder::new(test_config(10))
            .pups(2)
            .start_positions(vec![Position::ORIGIN, Position::new(f32::NAN, 0.0, 0.0)])
            .build();
        match result {
            Err(SimError::Behavior { pup, source }) => {
                assert_eq!(pup, PupId(1));
                assert!(matches!(source, BehaviorError::InvalidPosition(_)));
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("NaN start position accepted"),
        }
    }

    #[test]
    fn invalid_dt_rejected() {
        for dt in [-0.1, f32::NAN, f32::INFINITY] {
            let mut config = test_config(10);
            config.dt_secs = dt;
            let result = YardBuilder::new(config).build();
            assert!(matches!(result, Err(SimError::Config(_))), "dt = {dt}");
        }
    }
}

// ── Basic run ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn runs_to_end_tick() {
        let mut yard = YardBuilder::new(test_config(10)).pups(4).build().unwrap();
        yard.run(&mut NoopObserver).unwrap();
        assert_eq!(yard.clock.current_tick, Tick(10));
        assert!(yard.pups.iter().all(|p| p.ticks() == 10));
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut yard = YardBuilder::new(test_config(100)).pups(2).build().unwrap();
        yard.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(yard.clock.current_tick, Tick(5));
        yard.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(yard.clock.current_tick, Tick(8));
    }

    #[test]
    fn observer_called_correct_number_of_times() {
        let mut config = test_config(7);
        config.snapshot_interval_ticks = 3;
        let mut yard = YardBuilder::new(config).pups(2).build().unwrap();
        let mut obs = Recorder::default();
        yard.run(&mut obs).unwrap();

        assert_eq!(obs.starts, (0..7).map(Tick).collect::<Vec<_>>());
        assert_eq!(obs.ends, 7);
        assert_eq!(obs.snapshots, vec![(Tick(0), 2), (Tick(3), 2), (Tick(6), 2)]);
        assert_eq!(obs.end_tick, Some(Tick(7)));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let mut config = test_config(20);
        config.snapshot_interval_ticks = 0;
        let mut yard = YardBuilder::new(config).build().unwrap();
        let mut obs = Recorder::default();
        yard.run(&mut obs).unwrap();
        assert!(obs.snapshots.is_empty());
    }

    #[test]
    fn zero_dt_freezes_timers() {
        let mut config = test_config(500);
        config.dt_secs = 0.0;
        let mut yard = YardBuilder::new(config).pups(3).build().unwrap();
        yard.run(&mut NoopObserver).unwrap();
        // Nobody can move with a zero step.
        assert!(yard.pups.iter().all(|p| p.position() == Position::ORIGIN));
    }

    #[test]
    fn occupancy_counts_every_pup() {
        let mut yard = YardBuilder::new(test_config(3_000)).pups(16).build().unwrap();
        yard.run(&mut NoopObserver).unwrap();
        let total: usize = yard.occupancy().iter().map(|&(_, n)| n).sum();
        assert_eq!(total, 16);
    }
}

// ── Transitions and determinism ───────────────────────────────────────────────

#[cfg(test)]
mod transition_tests {
    use super::*;

    fn run_recorded(seed: u64, pups: usize, ticks: u64) -> Recorder {
        let mut config = test_config(ticks);
        config.seed = seed;
        let mut yard = YardBuilder::new(config).pups(pups).build().unwrap();
        let mut obs = Recorder::default();
        yard.run(&mut obs).unwrap();
        obs
    }

    #[test]
    fn transitions_follow_machine_edges() {
        let obs = run_recorded(7, 8, 5_000);
        assert!(!obs.transitions.is_empty(), "expected some state changes");
        for (_, t) in &obs.transitions {
            assert!(t.from.can_transition_to(t.to), "illegal edge {} -> {}", t.from, t.to);
        }
    }

    #[test]
    fn transitions_in_ascending_pup_order_within_a_tick() {
        let obs = run_recorded(11, 32, 3_000);
        for pair in obs.transitions.windows(2) {
            let ((ta, a), (tb, b)) = (pair[0], pair[1]);
            if ta == tb {
                assert!(a.pup < b.pup, "out of order at {ta}: {} then {}", a.pup, b.pup);
            }
        }
    }

    #[test]
    fn same_seed_same_transitions() {
        let a = run_recorded(99, 6, 2_000);
        let b = run_recorded(99, 6, 2_000);
        assert_eq!(a.transitions, b.transitions);
    }

    #[test]
    fn first_tick_raises_idling_for_every_pup() {
        let mut yard = YardBuilder::new(test_config(1)).pups(3).build().unwrap();
        let mut obs = Recorder::default();
        yard.run(&mut obs).unwrap();

        let pups: Vec<_> = obs.signals.iter().map(|(tick, pup, _)| (*tick, *pup)).collect();
        assert_eq!(pups, vec![(Tick(0), PupId(0)), (Tick(0), PupId(1)), (Tick(0), PupId(2))]);
        for (_, _, signals) in &obs.signals {
            assert_eq!(signals[0], AnimationSignal::Raise(AnimationIntent::Idling));
        }
        assert!(yard.pups.iter().all(|p| p.animation().pending().is_empty()));
    }

    #[test]
    fn every_transition_comes_with_signals() {
        let obs = run_recorded(5, 4, 4_000);
        for (tick, t) in &obs.transitions {
            assert!(
                obs.signals.iter().any(|(st, sp, _)| st == tick && *sp == t.pup),
                "no signal for {} at {tick}",
                t.pup
            );
        }
    }

    #[test]
    fn matches_hand_driven_controllers() {
        let config = test_config(2_500);
        let mut yard = YardBuilder::new(config.clone()).pups(5).build().unwrap();
        yard.run(&mut NoopObserver).unwrap();

        for i in 0..5u32 {
            let mut pup = Pup::new(PupRng::new(config.seed, PupId(i)));
            pup.initialize();
            for _ in 0..config.total_ticks {
                pup.tick(config.dt_secs).unwrap();
            }
            let ran = &yard.pups[i as usize];
            assert_eq!(pup.position(), ran.position(), "pup {i}");
            assert_eq!(pup.state_kind(), ran.state_kind(), "pup {i}");
        }
    }

    #[test]
    fn pup_trajectory_independent_of_yard_size() {
        let mut small = YardBuilder::new(test_config(1_000)).pups(1).build().unwrap();
        let mut large = YardBuilder::new(test_config(1_000)).pups(10).build().unwrap();
        small.run(&mut NoopObserver).unwrap();
        large.run(&mut NoopObserver).unwrap();
        assert_eq!(small.pups[0].position(), large.pups[0].position());
        assert_eq!(small.pups[0].state_kind(), large.pups[0].state_kind());
    }
}

// ── Error propagation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod error_tests {
    use super::*;

    fn assert_untouched(yard: &crate::Yard) {
        assert_eq!(yard.clock.current_tick, Tick(0));
        for pup in &yard.pups {
            assert_eq!(pup.ticks(), 0);
            assert!(pup.animation().pending().is_empty());
            assert!(pup.animation().raised().is_empty());
        }
    }

    #[test]
    fn uninitialized_pup_aborts_run() {
        let mut yard = YardBuilder::new(test_config(10)).pups(3).build().unwrap();
        yard.pups[1] = Pup::new(PupRng::from_seed(1));

        let mut obs = Recorder::default();
        let err = yard.run(&mut obs).unwrap_err();
        match err {
            SimError::Behavior { pup, source } => {
                assert_eq!(pup, PupId(1));
                assert_eq!(source, BehaviorError::NotInitialized);
            }
            other => panic!("unexpected error: {other}"),
        }
        // No pup was advanced, so neither earlier nor later ones moved on.
        assert_untouched(&yard);
        assert!(obs.starts.is_empty());
        assert!(obs.signals.is_empty());
    }

    #[test]
    fn failed_ticks_can_be_retried_after_repair() {
        let mut yard = YardBuilder::new(test_config(10)).pups(3).build().unwrap();
        yard.pups[0] = Pup::new(PupRng::new(42, PupId(0)));

        for _ in 0..3 {
            assert!(yard.run_ticks(1, &mut NoopObserver).is_err());
        }
        assert_untouched(&yard);

        yard.pups[0].initialize();
        let mut obs = Recorder::default();
        yard.run_ticks(2, &mut obs).unwrap();
        assert_eq!(yard.clock.current_tick, Tick(2));
        assert!(yard.pups.iter().all(|p| p.ticks() == 2));
        assert!(yard.pups.iter().all(|p| p.animation().pending().is_empty()));
        assert_eq!(obs.starts, vec![Tick(0), Tick(1)]);
    }

    #[test]
    fn bad_dt_after_build_leaves_yard_untouched() {
        let mut yard = YardBuilder::new(test_config(10)).pups(2).build().unwrap();
        yard.config.dt_secs = f32::NAN;
        let err = yard.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Config(_)), "got {err}");
        assert_untouched(&yard);
    }
}

// ── Parallel ──────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parallel"))]
mod parallel_tests {
    use super::*;

    #[test]
    fn thread_count_does_not_change_results() {
        let run = |threads: Option<usize>| {
            let mut config = test_config(3_000);
            config.num_threads = threads;
            let mut yard = YardBuilder::new(config).pups(24).build().unwrap();
            let mut obs = Recorder::default();
            yard.run(&mut obs).unwrap();
            let positions: Vec<_> = yard.pups.iter().map(|p| p.position()).collect();
            (obs.transitions, positions)
        };
        let single = run(Some(1));
        assert_eq!(single, run(Some(4)));
        assert_eq!(single, run(None));
    }
}
