//! The closed set of behavior states and their hook dispatch.

use std::fmt;

use crate::{Idle, Relieve, Sit, StateContext, Wander};

/// Fieldless tag of a [`BehaviorState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateKind {
    Idle,
    Wander,
    Sit,
    Relieve,
}

impl StateKind {
    pub const ALL: [StateKind; 4] = [
        StateKind::Idle,
        StateKind::Wander,
        StateKind::Sit,
        StateKind::Relieve,
    ];

    /// Stable lowercase name used in logs and trace files.
    pub fn name(self) -> &'static str {
        match self {
            StateKind::Idle    => "idle",
            StateKind::Wander  => "wander",
            StateKind::Sit     => "sit",
            StateKind::Relieve => "relieve",
        }
    }

    /// Whether the machine has a direct edge from `self` to `to`.
    pub fn can_transition_to(self, to: StateKind) -> bool {
        matches!(
            (self, to),
            (StateKind::Idle,    StateKind::Wander)
                | (StateKind::Wander,  StateKind::Sit)
                | (StateKind::Wander,  StateKind::Relieve)
                | (StateKind::Sit,     StateKind::Idle)
                | (StateKind::Relieve, StateKind::Idle)
        )
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A state change decided on one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub from: StateKind,
    pub to:   StateKind,
}

// ── BehaviorState ─────────────────────────────────────────────────────────────

/// The active behavior, carrying its own private timers.
///
/// A transition replaces the whole value; a state never turns into another
/// one in place.
#[derive(Debug, Clone, PartialEq)]
pub enum BehaviorState {
    Idle(Idle),
    Wander(Wander),
    Sit(Sit),
    Relieve(Relieve),
}

impl BehaviorState {
    pub fn kind(&self) -> StateKind {
        match self {
            BehaviorState::Idle(_)    => StateKind::Idle,
            BehaviorState::Wander(_)  => StateKind::Wander,
            BehaviorState::Sit(_)     => StateKind::Sit,
            BehaviorState::Relieve(_) => StateKind::Relieve,
        }
    }

    /// Runs once, on the first tick after the state became active.
    pub fn on_enter(&mut self, ctx: &mut StateContext<'_>) {
        match self {
            BehaviorState::Idle(s)    => s.on_enter(ctx),
            BehaviorState::Wander(s)  => s.on_enter(ctx),
            BehaviorState::Sit(s)     => s.on_enter(ctx),
            BehaviorState::Relieve(s) => s.on_enter(ctx),
        }
    }

    /// Runs every tick.  `Some(next)` requests a transition to `next`.
    pub fn on_update(&mut self, ctx: &mut StateContext<'_>) -> Option<BehaviorState> {
        match self {
            BehaviorState::Idle(s)    => s.on_update(ctx),
            BehaviorState::Wander(s)  => s.on_update(ctx),
            BehaviorState::Sit(s)     => s.on_update(ctx),
            BehaviorState::Relieve(s) => s.on_update(ctx),
        }
    }

    /// Runs once, on the tick the state requested its replacement.
    pub fn on_exit(&mut self, ctx: &mut StateContext<'_>) {
        match self {
            BehaviorState::Idle(s)    => s.on_exit(ctx),
            BehaviorState::Wander(s)  => s.on_exit(ctx),
            BehaviorState::Sit(s)     => s.on_exit(ctx),
            BehaviorState::Relieve(s) => s.on_exit(ctx),
        }
    }
}
