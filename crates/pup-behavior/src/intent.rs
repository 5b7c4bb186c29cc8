//! Animation intents — the named visual behaviors a pup asks the host to play.
//!
//! State hooks raise and clear intents on an [`Animator`].  The animator keeps
//! the set of raised intents as [`AnimationFlags`] and queues one
//! [`AnimationSignal`] per actual change.  Raising an intent that is already
//! raised (or clearing one that is not) changes nothing and queues nothing.
//!
//! Hosts either drain the queued signals or forward them to an
//! [`AnimationPlayer`] by trigger name.  The core never reads playback state
//! back.

use bitflags::bitflags;

/// One named visual behavior.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationIntent {
    Idling,
    Walking,
    Relieving,
    Sitting,
}

impl AnimationIntent {
    pub const ALL: [AnimationIntent; 4] = [
        AnimationIntent::Idling,
        AnimationIntent::Walking,
        AnimationIntent::Relieving,
        AnimationIntent::Sitting,
    ];

    /// Trigger parameter name understood by the sprite's animation graph.
    pub fn trigger(self) -> &'static str {
        match self {
            AnimationIntent::Idling    => "isIdling",
            AnimationIntent::Walking   => "isWalking",
            AnimationIntent::Relieving => "isPeeing",
            AnimationIntent::Sitting   => "isSitting",
        }
    }

    /// Short lowercase name used in logs and trace files.
    pub fn name(self) -> &'static str {
        match self {
            AnimationIntent::Idling    => "idling",
            AnimationIntent::Walking   => "walking",
            AnimationIntent::Relieving => "relieving",
            AnimationIntent::Sitting   => "sitting",
        }
    }

    #[inline]
    pub fn flag(self) -> AnimationFlags {
        match self {
            AnimationIntent::Idling    => AnimationFlags::IDLING,
            AnimationIntent::Walking   => AnimationFlags::WALKING,
            AnimationIntent::Relieving => AnimationFlags::RELIEVING,
            AnimationIntent::Sitting   => AnimationFlags::SITTING,
        }
    }
}

impl std::fmt::Display for AnimationIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// The set of currently raised animation intents.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct AnimationFlags: u8 {
        const IDLING    = 1 << 0;
        const WALKING   = 1 << 1;
        const RELIEVING = 1 << 2;
        const SITTING   = 1 << 3;
    }
}

impl AnimationFlags {
    /// The contained intents in declaration order.
    pub fn intents(self) -> impl Iterator<Item = AnimationIntent> {
        AnimationIntent::ALL.into_iter().filter(move |i| self.contains(i.flag()))
    }

    /// `+`-joined intent names, or `none` when empty.
    pub fn label(self) -> String {
        let names: Vec<&str> = self.intents().map(AnimationIntent::name).collect();
        if names.is_empty() { "none".to_owned() } else { names.join("+") }
    }
}

/// A single raise/clear change, in the order hooks produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnimationSignal {
    Raise(AnimationIntent),
    Clear(AnimationIntent),
}

impl AnimationSignal {
    pub fn intent(self) -> AnimationIntent {
        match self {
            AnimationSignal::Raise(i) | AnimationSignal::Clear(i) => i,
        }
    }
}

/// External animation playback, addressed by trigger name.
///
/// Mirrors the set/reset trigger API of typical sprite animation graphs.
pub trait AnimationPlayer {
    fn set_trigger(&mut self, name: &str);
    fn reset_trigger(&mut self, name: &str);
}

// ── Animator ──────────────────────────────────────────────────────────────────

/// Raised-intent bookkeeping plus the queue of pending signals.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    raised:  AnimationFlags,
    pending: Vec<AnimationSignal>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise `intent`.  Returns `true` if this changed the raised set.
    pub fn raise(&mut self, intent: AnimationIntent) -> bool {
        if self.raised.contains(intent.flag()) {
            return false;
        }
        self.raised.insert(intent.flag());
        self.pending.push(AnimationSignal::Raise(intent));
        tracing::trace!(intent = intent.name(), "raise animation intent");
        true
    }

    /// Clear `intent`.  Returns `true` if this changed the raised set.
    pub fn clear(&mut self, intent: AnimationIntent) -> bool {
        if !self.raised.contains(intent.flag()) {
            return false;
        }
        self.raised.remove(intent.flag());
        self.pending.push(AnimationSignal::Clear(intent));
        tracing::trace!(intent = intent.name(), "clear animation intent");
        true
    }

    /// Clear every raised intent, queueing one signal for each.
    pub fn clear_all(&mut self) {
        for intent in AnimationIntent::ALL {
            self.clear(intent);
        }
    }

    #[inline]
    pub fn is_raised(&self, intent: AnimationIntent) -> bool {
        self.raised.contains(intent.flag())
    }

    #[inline]
    pub fn raised(&self) -> AnimationFlags {
        self.raised
    }

    /// The raised intents in declaration order.
    pub fn raised_intents(&self) -> impl Iterator<Item = AnimationIntent> + '_ {
        self.raised.intents()
    }

    /// `+`-joined names of the raised intents, or `none`.
    pub fn label(&self) -> String {
        self.raised.label()
    }

    /// Signals queued since the last drain.
    pub fn pending(&self) -> &[AnimationSignal] {
        &self.pending
    }

    /// Take the queued signals, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<AnimationSignal> {
        std::mem::take(&mut self.pending)
    }

    /// Forward queued signals to `player` in order and empty the queue.
    pub fn flush_into<P: AnimationPlayer + ?Sized>(&mut self, player: &mut P) {
        for signal in self.pending.drain(..) {
            match signal {
                AnimationSignal::Raise(i) => player.set_trigger(i.trigger()),
                AnimationSignal::Clear(i) => player.reset_trigger(i.trigger()),
            }
        }
    }
}
