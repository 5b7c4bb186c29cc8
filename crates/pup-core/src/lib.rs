//! `pup-core` — foundational types for the `pup` behavior framework.
//!
//! This crate is a dependency of every other `pup-*` crate.  It has no
//! `pup-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`ids`]   | `PupId`                                                   |
//! | [`geo`]   | `Position`, `Facing`, Euclidean distance                  |
//! | [`time`]  | `Tick`, `SimClock`, `SimConfig`                           |
//! | [`rng`]   | `BehaviorRng` trait, `PupRng` (seeded), `ScriptedRng`     |
//! | [`error`] | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Facing, Position};
pub use ids::PupId;
pub use rng::{BehaviorRng, PupRng, ScriptedRng};
pub use time::{SimClock, SimConfig, Tick, validate_delta};
