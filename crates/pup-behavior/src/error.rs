use pup_core::Position;
use thiserror::Error;

/// Caller-contract violations at the controller boundary.
///
/// Behavior itself cannot fail; every variant means the host called the
/// controller incorrectly.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BehaviorError {
    #[error("invalid time step {0}: must be finite and non-negative")]
    InvalidDelta(f32),

    #[error("behavior controller ticked before initialize()")]
    NotInitialized,

    #[error("invalid position {0}: every component must be finite")]
    InvalidPosition(Position),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
