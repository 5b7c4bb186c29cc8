//! Sit — the pup sits where it stopped wandering, then goes back to idling.

use crate::{AnimationIntent, BehaviorState, Idle, StateContext};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sit {
    elapsed: f32,
}

impl Sit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds spent seated so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn on_enter(&mut self, ctx: &mut StateContext<'_>) {
        ctx.animator.raise(AnimationIntent::Sitting);
    }

    /// Leaves once the seated time reaches `sit_secs` (inclusive).
    pub fn on_update(&mut self, ctx: &mut StateContext<'_>) -> Option<BehaviorState> {
        self.elapsed += ctx.dt;
        (self.elapsed >= ctx.params.sit_secs).then_some(BehaviorState::Idle(Idle))
    }

    pub fn on_exit(&mut self, ctx: &mut StateContext<'_>) {
        ctx.animator.clear(AnimationIntent::Sitting);
    }
}
