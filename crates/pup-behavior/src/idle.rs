//! Idle — the entry state.  The pup stands still with its tongue out.

use crate::{AnimationIntent, BehaviorState, StateContext, Wander};

/// Waits in place until a per-tick coin flip sends the pup wandering.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Idle;

impl Idle {
    pub fn on_enter(&mut self, ctx: &mut StateContext<'_>) {
        ctx.animator.raise(AnimationIntent::Idling);
    }

    /// One draw per tick, independent of `dt`.
    pub fn on_update(&mut self, ctx: &mut StateContext<'_>) -> Option<BehaviorState> {
        ctx.rng
            .chance(ctx.params.idle_wander_chance)
            .then(|| BehaviorState::Wander(Wander::new(ctx.params)))
    }

    pub fn on_exit(&mut self, ctx: &mut StateContext<'_>) {
        ctx.animator.clear(AnimationIntent::Idling);
    }
}
