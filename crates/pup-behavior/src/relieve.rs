//! Relieve — walk to the fixed spot, do the deed, then go back to idling.

use crate::{AnimationIntent, BehaviorState, Idle, StateContext};

/// Two phases: walking to `relieve_spot`, then the timed act.
///
/// No intent is raised on enter; the first update decides between walking
/// and relieving.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Relieve {
    elapsed: f32,
}

impl Relieve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds of the act performed so far.  Stays `0.0` while walking.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn on_enter(&mut self, _ctx: &mut StateContext<'_>) {}

    /// Leaves once the act time strictly exceeds `relieve_secs`.
    ///
    /// The arrival check runs before the step, so the tick on which the pup
    /// arrives is still a walking tick and adds no act time.
    pub fn on_update(&mut self, ctx: &mut StateContext<'_>) -> Option<BehaviorState> {
        let spot = ctx.params.relieve_spot;
        if !ctx.body.has_reached(spot) {
            ctx.body.walk_toward(spot, ctx.params.walk_speed, ctx.dt);
            ctx.animator.raise(AnimationIntent::Walking);
            return None;
        }

        ctx.animator.clear(AnimationIntent::Walking);
        ctx.animator.raise(AnimationIntent::Relieving);
        self.elapsed += ctx.dt;
        (self.elapsed > ctx.params.relieve_secs).then_some(BehaviorState::Idle(Idle))
    }

    pub fn on_exit(&mut self, ctx: &mut StateContext<'_>) {
        ctx.animator.clear(AnimationIntent::Relieving);
    }
}
