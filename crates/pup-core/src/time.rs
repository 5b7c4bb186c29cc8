//! Simulation time model.
//!
//! # Design
//!
//! Behavior code works in continuous seconds: every tick carries an elapsed
//! delta `dt`, and deltas may vary from frame to frame.  Hosts that step on a
//! fixed cadence (the yard runner, tests) count frames with an integer `Tick`
//! and map them to elapsed time through `SimClock`:
//!
//!   elapsed_secs = tick * dt_secs
//!
//! The integer counter keeps ordering and snapshot arithmetic exact even
//! though the per-tick delta is a float.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Reject a time step that would corrupt timers or positions.
///
/// Returns `dt` unchanged when it is finite and `>= 0.0`.
#[inline]
pub fn validate_delta(dt: f32) -> CoreResult<f32> {
    if dt.is_finite() && dt >= 0.0 {
        Ok(dt)
    } else {
        Err(CoreError::InvalidDelta(dt))
    }
}

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Fixed-step frame clock used by headless hosts.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Seconds of behavior time each tick represents.
    pub dt_secs: f32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(dt_secs: f32) -> Self {
        Self { dt_secs, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed behavior seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.dt_secs as f64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration for headless hosts.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// the yard runner.  Behavior parameters are fixed and not part of it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Seconds per tick.  60 fps ≈ 0.0167.
    pub dt_secs: f32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Snapshot every N ticks.  1 = every tick; 0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt_secs:                 1.0 / 60.0,
            total_ticks:             60 * 60,
            seed:                    42,
            num_threads:             None,
            snapshot_interval_ticks: 6,
        }
    }
}

impl SimConfig {
    /// The tick at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.dt_secs)
    }

    /// Check that the configured time step is usable.
    pub fn validate(&self) -> CoreResult<()> {
        validate_delta(self.dt_secs)
            .map(|_| ())
            .map_err(|_| CoreError::Config(format!("dt_secs must be finite and >= 0, got {}", self.dt_secs)))
    }

    /// `true` when `tick` falls on a snapshot boundary.
    #[inline]
    pub fn is_snapshot_tick(&self, tick: Tick) -> bool {
        self.snapshot_interval_ticks > 0 && tick.0.is_multiple_of(self.snapshot_interval_ticks)
    }
}
