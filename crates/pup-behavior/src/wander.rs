//! Wander — the pup ambles between random points near the relieve spot.
//!
//! # Bouts
//!
//! A bout ends when the pup reaches its destination or has walked for longer
//! than `wander_bout_secs`.  At the end of every bout the pup may sit down
//! (`wander_sit_chance`), and a fresh destination is sampled either way.
//! Separately, on every tick the pup may decide it needs to relieve itself
//! (`wander_relieve_chance`).
//!
//! # Draw order
//!
//! Per tick: sit roll, distance, angle (these three only on a bout boundary),
//! then the relieve roll.  Scripted tests depend on this order.

use pup_core::{BehaviorRng, Position};

use crate::{AnimationIntent, BehaviorParams, BehaviorState, Relieve, Sit, StateContext};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wander {
    destination: Position,
    elapsed:     f32,
}

impl Wander {
    /// A fresh wander heading for the fixed first destination.
    pub fn new(params: &BehaviorParams) -> Self {
        Self::toward(params.wander_first_destination)
    }

    /// A fresh wander heading for `destination`.
    pub fn toward(destination: Position) -> Self {
        Self { destination, elapsed: 0.0 }
    }

    pub fn destination(&self) -> Position {
        self.destination
    }

    /// Seconds walked in the current bout.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn on_enter(&mut self, ctx: &mut StateContext<'_>) {
        ctx.animator.raise(AnimationIntent::Walking);
    }

    pub fn on_update(&mut self, ctx: &mut StateContext<'_>) -> Option<BehaviorState> {
        let params = ctx.params;
        self.elapsed += ctx.dt;
        ctx.body.walk_toward(self.destination, params.walk_speed, ctx.dt);

        let mut sit = false;
        if self.elapsed > params.wander_bout_secs || ctx.body.has_reached(self.destination) {
            sit = ctx.rng.chance(params.wander_sit_chance);
            self.elapsed = 0.0;
            self.destination = sample_destination(&mut *ctx.rng, params);
        }

        let relieve = ctx.rng.chance(params.wander_relieve_chance);
        resolve_bout_exit(sit, relieve)
    }

    pub fn on_exit(&mut self, ctx: &mut StateContext<'_>) {
        ctx.animator.clear(AnimationIntent::Walking);
    }
}

/// Pick the state to leave for when both exits may fire on the same tick.
///
/// Relieve overrides Sit: the relieve roll is evaluated after the sit roll
/// and replaces any pending sit request.
pub fn resolve_bout_exit(sit: bool, relieve: bool) -> Option<BehaviorState> {
    if relieve {
        Some(BehaviorState::Relieve(Relieve::new()))
    } else if sit {
        Some(BehaviorState::Sit(Sit::new()))
    } else {
        None
    }
}

/// Sample a destination inside the wander envelope.
///
/// Distance is uniform in `wander_distance` and bearing uniform in
/// `wander_angle`, both measured from `relieve_spot`.  With the fixed
/// parameters this is the quarter annulus below and to the right of the
/// spot.  Consumes exactly two draws.
pub fn sample_destination<R: BehaviorRng + ?Sized>(rng: &mut R, params: &BehaviorParams) -> Position {
    let (min_d, max_d) = params.wander_distance;
    let (min_a, max_a) = params.wander_angle;
    let distance = rng.range(min_d, max_d);
    let angle = rng.range(min_a, max_a);
    params.relieve_spot + Position::planar(distance * angle.cos(), distance * angle.sin())
}
