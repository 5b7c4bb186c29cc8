//! Plain data row types written by output backends.

use pup_behavior::{AnimationFlags, StateKind};
use pup_core::Facing;

/// One pup's observable state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PupSnapshotRow {
    pub pup_id:    u32,
    pub tick:      u64,
    pub state:     StateKind,
    pub x:         f32,
    pub y:         f32,
    pub facing:    Facing,
    /// Raised intents; empty only before the first tick.
    pub animation: AnimationFlags,
}

/// One state change decided during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRow {
    pub pup_id: u32,
    pub tick:   u64,
    pub from:   StateKind,
    pub to:     StateKind,
}
