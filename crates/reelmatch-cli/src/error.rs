//! Error types for reelmatch-cli

use thiserror::Error;

/// Result type alias for reelmatch-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in reelmatch-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the core, data, or recommender crates
    #[error(transparent)]
    Core(#[from] reelmatch_core::Error),

    /// A blocking recommendation task panicked or was cancelled
    #[error("Recommendation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    /// Returns whether the failure was caused by the invocation itself.
    pub fn is_user_error(&self) -> bool {
        match self {
            Error::Core(e) => e.is_user_error(),
            Error::Task(_) => false,
        }
    }
}

/// Process exit status for a failed run: 2 for mistakes in the invocation,
/// 1 for everything else.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    let user_error = err
        .downcast_ref::<Error>()
        .map(Error::is_user_error)
        .or_else(|| {
            err.downcast_ref::<reelmatch_core::Error>()
                .map(reelmatch_core::Error::is_user_error)
        })
        .unwrap_or(false);
    if user_error { 2 } else { 1 }
}
