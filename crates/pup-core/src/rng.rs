//! Injected random sources for behavior decisions.
//!
//! # Determinism strategy
//!
//! Behavior code never touches a thread-local or global generator.  Every
//! controller owns one [`BehaviorRng`] and threads it through each
//! probability check and destination sample, so a run is a pure function of
//! its seeds and time steps.
//!
//! Each pup in a yard gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (pup_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive pup IDs uniformly across the seed space.  Adding
//! pups at the end of a yard does not disturb the streams of existing ones.
//!
//! Tests use [`ScriptedRng`] to force a specific branch on a specific draw.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::PupId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── BehaviorRng ───────────────────────────────────────────────────────────────

/// The random source a behavior controller draws from.
///
/// Only [`unit`][Self::unit] is required; the range and Bernoulli helpers are
/// defined on top of it so a scripted source controls every draw.
pub trait BehaviorRng {
    /// Uniform sample in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Uniform sample in `[low, high)`.  Consumes exactly one `unit` draw.
    #[inline]
    fn range(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.unit()
    }

    /// `true` with probability `p`.  Consumes exactly one `unit` draw.
    #[inline]
    fn chance(&mut self, p: f32) -> bool {
        self.unit() < p
    }
}

impl<R: BehaviorRng + ?Sized> BehaviorRng for &mut R {
    #[inline]
    fn unit(&mut self) -> f32 {
        (**self).unit()
    }
}

impl<R: BehaviorRng + ?Sized> BehaviorRng for Box<R> {
    #[inline]
    fn unit(&mut self) -> f32 {
        (**self).unit()
    }
}

// ── PupRng ────────────────────────────────────────────────────────────────────

/// Per-pup deterministic RNG.
///
/// Each pup holds its own, so yards can tick pups on separate threads
/// without sharing generator state.
#[derive(Debug, Clone)]
pub struct PupRng(SmallRng);

impl PupRng {
    /// Seed deterministically from the run's global seed and a pup ID.
    pub fn new(global_seed: u64, pup: PupId) -> Self {
        let seed = global_seed ^ (pup.0 as u64).wrapping_mul(MIXING_CONSTANT);
        PupRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed directly, for single-controller hosts.
    pub fn from_seed(seed: u64) -> Self {
        PupRng(SmallRng::seed_from_u64(seed))
    }
}

impl BehaviorRng for PupRng {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.0.r#gen::<f32>()
    }
}

// ── ScriptedRng ───────────────────────────────────────────────────────────────

/// A random source that replays queued values, then repeats a fallback.
///
/// Values are returned from [`unit`][BehaviorRng::unit] verbatim, so they
/// should lie in `[0, 1)`.  A fallback near `1.0` makes every small-probability
/// check fail, which keeps a controller in its current state.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    queue:    VecDeque<f32>,
    fallback: f32,
    draws:    u64,
}

impl ScriptedRng {
    /// Fallback used by [`quiet`][Self::quiet]: fails every check with `p < 0.999`.
    pub const QUIET: f32 = 0.999;

    /// A source that returns `fallback` forever.
    pub fn new(fallback: f32) -> Self {
        Self { queue: VecDeque::new(), fallback, draws: 0 }
    }

    /// A source whose every probability check fails.
    pub fn quiet() -> Self {
        Self::new(Self::QUIET)
    }

    /// Queue `values` to be returned (in order) before the fallback.
    pub fn with(mut self, values: impl IntoIterator<Item = f32>) -> Self {
        self.queue.extend(values);
        self
    }

    /// Queue one more value.
    pub fn push(&mut self, value: f32) {
        self.queue.push_back(value);
    }

    /// Total number of draws served so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl BehaviorRng for ScriptedRng {
    fn unit(&mut self) -> f32 {
        self.draws += 1;
        self.queue.pop_front().unwrap_or(self.fallback)
    }
}
