//! `pup-behavior` — the behavior state machine that drives a pup.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`controller`] | `BehaviorController<R>` — owns the active state, runs `tick(dt)`|
//! | [`state`]      | `BehaviorState` enum + hook dispatch, `StateKind`, `Transition` |
//! | [`idle`]       | `Idle` — entry state                                            |
//! | [`wander`]     | `Wander` — random bouts inside the wander envelope              |
//! | [`sit`]        | `Sit` — timed rest                                              |
//! | [`relieve`]    | `Relieve` — walk to the fixed spot, timed act                   |
//! | [`movement`]   | `goal_reached`, `move_toward`, `Body`                           |
//! | [`intent`]     | `AnimationIntent`, `Animator`, `AnimationPlayer`                |
//! | [`context`]    | `StateContext<'a>` — the per-tick view lent to hooks            |
//! | [`params`]     | `BehaviorParams` — fixed behavior constants                     |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Transition graph
//!
//! ```text
//!            1%/tick              20% at bout end
//!   Idle ───────────────▶ Wander ─────────────────▶ Sit ──(≥ 3 s)──▶ Idle
//!                           │
//!                           │ 0.1%/tick
//!                           ▼
//!                        Relieve ──(at spot, > 2 s)──▶ Idle
//! ```
//!
//! Every probability check and destination sample draws from the random
//! source injected into the controller, so a run is reproducible from its
//! seed.

pub mod context;
pub mod controller;
pub mod error;
pub mod idle;
pub mod intent;
pub mod movement;
pub mod params;
pub mod relieve;
pub mod sit;
pub mod state;
pub mod wander;


pub use context::StateContext;
pub use controller::BehaviorController;
pub use error::{BehaviorError, BehaviorResult};
pub use idle::Idle;
pub use intent::{AnimationFlags, AnimationIntent, AnimationPlayer, AnimationSignal, Animator};
pub use movement::{Body, GOAL_EPSILON, goal_reached, move_toward};
pub use params::BehaviorParams;
pub use relieve::Relieve;
pub use sit::Sit;
pub use state::{BehaviorState, StateKind, Transition};
pub use wander::Wander;
