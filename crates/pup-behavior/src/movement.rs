//! Goal checks and straight-line movement shared by every moving state.

use pup_core::{Facing, Position};

/// A target closer than this (in yard units) counts as reached.
///
/// Movement is velocity-integrated, so arrival is a proximity test rather
/// than exact equality.
pub const GOAL_EPSILON: f32 = 0.1;

/// `true` iff `current` lies strictly within [`GOAL_EPSILON`] of `target`.
#[inline]
pub fn goal_reached(current: Position, target: Position) -> bool {
    current.distance(target) < GOAL_EPSILON
}

/// Step from `current` toward `target` by at most `max_step` units.
///
/// Lands exactly on `target` when it is within one step, so repeated calls
/// never overshoot or oscillate around it.  A non-positive `max_step` leaves
/// `current` where it is.
pub fn move_toward(current: Position, target: Position, max_step: f32) -> Position {
    let dist = current.distance(target);
    if dist <= max_step || dist == 0.0 {
        return target;
    }
    if max_step <= 0.0 {
        return current;
    }
    let t = max_step / dist;
    Position::new(
        current.x + (target.x - current.x) * t,
        current.y + (target.y - current.y) * t,
        current.z + (target.z - current.z) * t,
    )
}

// ── Body ──────────────────────────────────────────────────────────────────────

/// The pup's transform as seen by the render sink.
///
/// Owned by the controller and lent to the active state's hooks, which are
/// the only code that moves it.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    pub position: Position,
    pub facing:   Facing,
}

impl Body {
    pub fn at(position: Position) -> Self {
        Self { position, facing: Facing::default() }
    }

    /// Walk toward `target` at `speed` for `dt` seconds.
    ///
    /// Facing is recomputed on every call from the position before the step,
    /// so it follows the target even if the target changes mid-path.
    pub fn walk_toward(&mut self, target: Position, speed: f32, dt: f32) {
        self.facing = Facing::toward(self.position, target);
        self.position = move_toward(self.position, target, speed * dt);
    }

    #[inline]
    pub fn has_reached(&self, target: Position) -> bool {
        goal_reached(self.position, target)
    }
}
