use pup_behavior::BehaviorError;
use pup_core::{CoreError, PupId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("yard configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("{what} length {got} does not match pup count {expected}")]
    PupCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{0} pups exceed the PupId range")]
    TooManyPups(usize),

    #[error("behavior error for {pup}: {source}")]
    Behavior {
        pup:    PupId,
        #[source]
        source: BehaviorError,
    },

    #[cfg(feature = "parallel")]
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;
