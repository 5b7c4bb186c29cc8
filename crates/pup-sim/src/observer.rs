//! Yard observer trait for progress reporting and data collection.

use pup_behavior::AnimationSignal;
use pup_core::{PupId, Tick};

use crate::{Pup, TransitionEvent};

/// Callbacks invoked by [`Yard::run`][crate::Yard::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — transition printer
///
/// ```rust,ignore
/// struct TransitionPrinter;
///
/// impl YardObserver for TransitionPrinter {
///     fn on_tick_end(&mut self, tick: Tick, transitions: &[TransitionEvent]) {
///         for t in transitions {
///             println!("{tick}: {} {} -> {}", t.pup, t.from, t.to);
///         }
///     }
/// }
/// ```
pub trait YardObserver {
    /// Called at the very start of each tick, before any pup is ticked.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for each pup whose animation intents changed this tick, in
    /// ascending `PupId` order, before `on_tick_end`.
    fn on_signals(&mut self, _tick: Tick, _pup: PupId, _signals: &[AnimationSignal]) {}

    /// Called at the end of each tick with every transition decided during
    /// it, in ascending `PupId` order.
    fn on_tick_end(&mut self, _tick: Tick, _transitions: &[TransitionEvent]) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`).
    ///
    /// `pups[i]` is the controller of `PupId(i)`.
    fn on_snapshot(&mut self, _tick: Tick, _pups: &[Pup]) {}

    /// Called once after the final tick of [`Yard::run`][crate::Yard::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`YardObserver`] that does nothing.
pub struct NoopObserver;

impl YardObserver for NoopObserver {}
