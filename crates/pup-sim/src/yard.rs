//! The `Yard` struct and its tick loop.

use pup_behavior::{BehaviorController, BehaviorError, StateKind};
use pup_core::{PupId, PupRng, SimClock, SimConfig, Tick};

use crate::{SimError, SimResult, YardObserver};

/// One pup: a behavior controller driven by its own seeded random source.
pub type Pup = BehaviorController<PupRng>;

/// A state change made by one pup during one yard tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransitionEvent {
    pub pup:  PupId,
    pub from: StateKind,
    pub to:   StateKind,
}

// ── Yard ──────────────────────────────────────────────────────────────────────

/// Headless fixed-step host for a set of independent pups.
///
/// Every tick advances each pup's controller by `config.dt_secs`, collects
/// the transitions decided on that tick in ascending `PupId` order, and
/// reports them to the observer.  Pups share nothing, so the `parallel`
/// feature changes wall time only, never results.
///
/// Create via [`YardBuilder`][crate::YardBuilder].
pub struct Yard {
    /// Run configuration (tick length, tick count, seed, …).
    pub config: SimConfig,

    /// Tracks the current tick and maps it to elapsed seconds.
    pub clock: SimClock,

    /// Controllers indexed by `PupId`.
    pub pups: Vec<Pup>,

    /// Dedicated pool when `config.num_threads` is set; otherwise Rayon's
    /// global pool is used.
    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl Yard {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: YardObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        tracing::info!(
            pups        = self.pups.len(),
            total_ticks = self.config.total_ticks,
            seed        = self.config.seed,
            "yard run starting"
        );
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }
            self.step(now, observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        tracing::info!(final_tick = %self.clock.current_tick, "yard run finished");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: YardObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.step(now, observer)?;
        }
        Ok(())
    }

    #[inline]
    pub fn pup(&self, id: PupId) -> Option<&Pup> {
        self.pups.get(id.index())
    }

    #[inline]
    pub fn pup_count(&self) -> usize {
        self.pups.len()
    }

    /// How many pups are currently in each state, in [`StateKind::ALL`] order.
    pub fn occupancy(&self) -> [(StateKind, usize); 4] {
        StateKind::ALL.map(|kind| {
            let n = self.pups.iter().filter(|p| p.state_kind() == Some(kind)).count();
            (kind, n)
        })
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: YardObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        self.check_ready()?;
        observer.on_tick_start(now);
        let transitions = self.process_tick(now, observer)?;
        observer.on_tick_end(now, &transitions);
        if self.config.is_snapshot_tick(now) {
            observer.on_snapshot(now, &self.pups);
        }
        self.clock.advance();
        Ok(())
    }

    /// Reject a tick that some controller would refuse, before any pup is
    /// advanced.  A failed tick therefore leaves every pup, signal queue and
    /// the clock untouched, and the yard may be repaired and resumed.
    fn check_ready(&self) -> SimResult<()> {
        self.config.validate()?;
        for (i, pup) in self.pups.iter().enumerate() {
            if !pup.is_initialized() {
                return Err(SimError::Behavior {
                    pup:    self.pup_id(i)?,
                    source: BehaviorError::NotInitialized,
                });
            }
        }
        Ok(())
    }

    fn pup_id(&self, index: usize) -> SimResult<PupId> {
        PupId::try_from(index).map_err(|_| SimError::TooManyPups(self.pups.len()))
    }

    fn process_tick<O: YardObserver>(
        &mut self,
        now:      Tick,
        observer: &mut O,
    ) -> SimResult<Vec<TransitionEvent>> {
        let dt = self.config.dt_secs;

        // ── Phase 1: tick every controller ────────────────────────────────
        #[cfg(not(feature = "parallel"))]
        let outcomes = tick_all(&mut self.pups, dt);

        #[cfg(feature = "parallel")]
        let outcomes = match &self.pool {
            Some(pool) => {
                let pups = &mut self.pups;
                pool.install(|| tick_all(pups, dt))
            }
            None => tick_all(&mut self.pups, dt),
        };

        // ── Phase 2: collect in ascending PupId order ─────────────────────
        //
        // `outcomes[i]` belongs to `PupId(i)` in both code paths, so the
        // event order is the same either way.  `check_ready` has ruled out
        // every controller error.  Signals are drained every tick so the
        // queues stay bounded.
        let mut transitions = Vec::new();
        for (i, outcome) in outcomes.into_iter().enumerate() {
            let pup = self.pup_id(i)?;
            outcome.map_err(|source| SimError::Behavior { pup, source })?;

            let controller = &mut self.pups[i];
            if let Some(t) = controller.last_transition() {
                transitions.push(TransitionEvent { pup, from: t.from, to: t.to });
            }
            let signals = controller.drain_signals();
            if !signals.is_empty() {
                observer.on_signals(now, pup, &signals);
            }
        }
        Ok(transitions)
    }
}

/// Advance every pup by `dt`.  With the `parallel` feature this runs on
/// Rayon's thread pool; each pup owns its RNG so no locking is needed.
fn tick_all(pups: &mut [Pup], dt: f32) -> Vec<Result<(), BehaviorError>> {
    #[cfg(not(feature = "parallel"))]
    {
        pups.iter_mut().map(|pup| pup.tick(dt)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        pups.par_iter_mut().map(|pup| pup.tick(dt)).collect()
    }
}
