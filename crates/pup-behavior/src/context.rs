//! Mutable per-tick view lent to state hooks.

use pup_core::BehaviorRng;

use crate::{Animator, BehaviorParams, Body};

/// Everything a state hook may read or change during one tick.
///
/// Built by [`BehaviorController::tick`][crate::BehaviorController::tick]
/// from split borrows of its own fields, so hooks never hold references into
/// the controller beyond the call.
pub struct StateContext<'a> {
    /// Seconds elapsed since the previous tick (validated: finite, `>= 0`).
    pub dt: f32,

    /// The pup's transform.  Only movement helpers write to it.
    pub body: &'a mut Body,

    /// Raised animation intents and the pending signal queue.
    pub animator: &'a mut Animator,

    /// The controller's injected random source.
    pub rng: &'a mut dyn BehaviorRng,

    /// Fixed behavior constants.
    pub params: &'a BehaviorParams,
}

impl<'a> StateContext<'a> {
    #[inline]
    pub fn new(
        dt:       f32,
        body:     &'a mut Body,
        animator: &'a mut Animator,
        rng:      &'a mut dyn BehaviorRng,
        params:   &'a BehaviorParams,
    ) -> Self {
        Self { dt, body, animator, rng, params }
    }
}
