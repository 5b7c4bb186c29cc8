//! `pup-sim` — headless fixed-step yard runner.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Tick     — advance every pup's controller by config.dt_secs
//!                (parallel with the `parallel` feature).
//!   ② Collect  — in ascending PupId order, drain each pup's animation
//!                signals (on_signals) and gather its transition;
//!                the first controller error aborts the run.
//!   ③ Report   — on_tick_end(transitions), then on_snapshot on
//!                snapshot ticks.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Ticks pups on Rayon's thread pool.                     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pup_core::SimConfig;
//! use pup_sim::{NoopObserver, YardBuilder};
//!
//! let mut yard = YardBuilder::new(SimConfig::default()).pups(4).build()?;
//! yard.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod yard;

#[cfg(test)]
mod tests;

pub use builder::YardBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, YardObserver};
pub use yard::{Pup, TransitionEvent, Yard};
