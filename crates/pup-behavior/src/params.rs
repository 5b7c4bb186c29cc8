//! Fixed behavior constants shared read-only by every state.

use std::f32::consts::FRAC_PI_2;

use pup_core::Position;

/// Immutable behavior parameters passed by reference into every state hook.
///
/// The values are fixed; [`BehaviorParams::default`] is the only source.
/// Times are in seconds, distances in yard units.
#[derive(Clone, Debug, PartialEq)]
pub struct BehaviorParams {
    /// Walking speed in units per second.
    pub walk_speed: f32,

    /// Per-tick probability of leaving Idle for Wander.
    pub idle_wander_chance: f32,

    /// A wander bout ends once it has lasted longer than this.
    pub wander_bout_secs: f32,

    /// Probability of sitting down when a wander bout ends.
    pub wander_sit_chance: f32,

    /// Per-tick probability of heading off to relieve while wandering.
    pub wander_relieve_chance: f32,

    /// Wander destinations lie this far from `relieve_spot`: `(min, max)`.
    pub wander_distance: (f32, f32),

    /// ...at this bearing in radians: `(min, max)`.
    pub wander_angle: (f32, f32),

    /// Destination of the first bout of a freshly constructed Wander.
    pub wander_first_destination: Position,

    /// How long a pup stays seated.
    pub sit_secs: f32,

    /// How long the act itself lasts once the pup is at `relieve_spot`.
    pub relieve_secs: f32,

    /// The fixed relieving point, which is also the center of the wander
    /// envelope.
    pub relieve_spot: Position,
}

impl Default for BehaviorParams {
    fn default() -> Self {
        Self {
            walk_speed:               0.5,
            idle_wander_chance:       0.01,
            wander_bout_secs:         4.0,
            wander_sit_chance:        0.2,
            wander_relieve_chance:    0.001,
            wander_distance:          (1.0, 2.0),
            wander_angle:             (-FRAC_PI_2, 0.0),
            wander_first_destination: Position::planar(0.5, -1.5),
            sit_secs:                 3.0,
            relieve_secs:             2.0,
            relieve_spot:             Position::ORIGIN,
        }
    }
}
