//! `BehaviorController` — owns the active state and drives its lifecycle.

use pup_core::{BehaviorRng, Facing, Position, validate_delta};

use crate::{
    AnimationPlayer, AnimationSignal, Animator, BehaviorError, BehaviorParams, BehaviorResult,
    BehaviorState, Body, Idle, StateContext, StateKind, Transition,
};

/// Drives one pup through its behavior cycle, one state step per tick.
///
/// # Lifecycle
///
/// Each call to [`tick`][Self::tick]:
///
/// 1. If the active state was just adopted, runs its `on_enter` hook and then
///    its first `on_update` in the same tick (no `dt` is skipped).
/// 2. Otherwise runs `on_update(dt)`.
/// 3. If the update requested a transition, runs the old state's `on_exit`
///    immediately, drops it, and adopts the requested state.  The new state's
///    `on_enter` is deferred to the next tick, so at most one transition
///    happens per tick.
///
/// The controller starts uninitialized; [`initialize`][Self::initialize]
/// installs `Idle` as the entry state.
///
/// # Example
///
/// ```rust
/// use pup_behavior::BehaviorController;
/// use pup_core::PupRng;
///
/// let mut pup = BehaviorController::new(PupRng::from_seed(7));
/// pup.initialize();
/// pup.tick(1.0 / 60.0).unwrap();
/// assert!(pup.state_kind().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct BehaviorController<R: BehaviorRng> {
    state:           Option<BehaviorState>,
    pending_enter:   bool,
    body:            Body,
    animator:        Animator,
    rng:             R,
    params:          BehaviorParams,
    ticks:           u64,
    last_transition: Option<Transition>,
}

impl<R: BehaviorRng> BehaviorController<R> {
    /// An uninitialized controller at the origin, facing right.
    pub fn new(rng: R) -> Self {
        Self {
            state:           None,
            pending_enter:   false,
            body:            Body::default(),
            animator:        Animator::new(),
            rng,
            params:          BehaviorParams::default(),
            ticks:           0,
            last_transition: None,
        }
    }

    /// Install a fresh `Idle` as the active state, pending enter.
    ///
    /// Calling this again restarts the cycle; any raised intents are cleared
    /// first (and their clear signals queued).
    pub fn initialize(&mut self) {
        self.animator.clear_all();
        self.state = Some(BehaviorState::Idle(Idle));
        self.pending_enter = true;
        self.last_transition = None;
    }

    /// Teleport the pup to `position` without changing its state.
    ///
    /// # Errors
    ///
    /// [`BehaviorError::InvalidPosition`] if any component is NaN or
    /// infinite.  The pup stays where it was.
    pub fn spawn_at(&mut self, position: Position) -> BehaviorResult<()> {
        if !position.is_finite() {
            return Err(BehaviorError::InvalidPosition(position));
        }
        self.body.position = position;
        Ok(())
    }

    /// Advance the active state by `dt` seconds.
    ///
    /// # Errors
    ///
    /// - [`BehaviorError::InvalidDelta`] if `dt` is negative or not finite.
    ///   Nothing is mutated.
    /// - [`BehaviorError::NotInitialized`] if [`initialize`][Self::initialize]
    ///   was never called.
    pub fn tick(&mut self, dt: f32) -> BehaviorResult<()> {
        let dt = validate_delta(dt).map_err(|_| BehaviorError::InvalidDelta(dt))?;

        let Self { state, pending_enter, body, animator, rng, params, ticks, last_transition } = self;
        let current = state.as_mut().ok_or(BehaviorError::NotInitialized)?;
        *last_transition = None;

        let mut ctx = StateContext::new(dt, body, animator, rng, params);

        if std::mem::take(pending_enter) {
            current.on_enter(&mut ctx);
        }

        if let Some(next) = current.on_update(&mut ctx) {
            current.on_exit(&mut ctx);
            let transition = Transition { from: current.kind(), to: next.kind() };
            tracing::debug!(
                from = %transition.from,
                to   = %transition.to,
                tick = *ticks,
                "behavior transition"
            );
            *current = next;
            *pending_enter = true;
            *last_transition = Some(transition);
        }

        *ticks += 1;
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Tag of the active state; `None` before `initialize`.
    #[inline]
    pub fn state_kind(&self) -> Option<StateKind> {
        self.state.as_ref().map(BehaviorState::kind)
    }

    #[inline]
    pub fn state(&self) -> Option<&BehaviorState> {
        self.state.as_ref()
    }

    /// `true` if the active state's `on_enter` has not run yet.
    #[inline]
    pub fn is_entering(&self) -> bool {
        self.pending_enter
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.body.position
    }

    #[inline]
    pub fn facing(&self) -> Facing {
        self.body.facing
    }

    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Raised intents and the signals not yet drained.
    #[inline]
    pub fn animation(&self) -> &Animator {
        &self.animator
    }

    /// The transition decided on the most recent tick, if any.
    #[inline]
    pub fn last_transition(&self) -> Option<Transition> {
        self.last_transition
    }

    /// Number of successful ticks since construction.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The injected random source (e.g. to queue scripted draws in tests).
    #[inline]
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    // ── Animation output ──────────────────────────────────────────────────

    /// Take the raise/clear signals queued since the last drain.
    pub fn drain_signals(&mut self) -> Vec<AnimationSignal> {
        self.animator.drain()
    }

    /// Forward queued signals to an external animation player.
    pub fn flush_into<P: AnimationPlayer + ?Sized>(&mut self, player: &mut P) {
        self.animator.flush_into(player);
    }
}
