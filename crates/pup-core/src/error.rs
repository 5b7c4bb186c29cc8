//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The base error type for `pup-core` values.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A time step was negative, NaN, or infinite.
    #[error("invalid time step {0}: must be finite and non-negative")]
    InvalidDelta(f32),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `pup-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
