//! Error types for list-diff.
//!
//! Usage errors are raised before any list is touched. Worker errors only
//! occur when a computation is offloaded.

use thiserror::Error;

/// Errors that can occur while computing or applying an edit script.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListDiffError {
    /// Only one half of a custom comparator was supplied.
    #[error("incomplete comparator: `{missing}` must be supplied together with `{given}`")]
    IncompleteComparator {
        /// The function that was left out
        missing: &'static str,
        /// The function that was supplied
        given: &'static str,
    },

    /// The worker thread could not be started.
    #[error("failed to spawn diff worker: {0}")]
    WorkerSpawn(String),

    /// The worker panicked while computing the edit script.
    #[error("diff worker panicked: {0}")]
    WorkerPanicked(String),

    /// The worker went away without sending a response.
    #[error("diff worker disconnected before responding")]
    WorkerDisconnected,

    /// An operation does not fit the list it is applied to.
    #[error("operation index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds {
        /// Index carried by the operation
        index: usize,
        /// Length of the list at the time of application
        len: usize,
    },
}

/// Result type alias for list-diff operations.
pub type ListDiffResult<T> = Result<T, ListDiffError>;

impl ListDiffError {
    /// Create a spawn error from any error type.
    pub fn spawn(err: impl std::error::Error) -> Self {
        Self::WorkerSpawn(err.to_string())
    }

    /// Whether this error came from the worker boundary.
    pub fn is_worker_failure(&self) -> bool {
        matches!(
            self,
            Self::WorkerSpawn(_) | Self::WorkerPanicked(_) | Self::WorkerDisconnected
        )
    }
}
