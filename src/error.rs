//! Error types for skytrack

use thiserror::Error;

/// Result type for skytrack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while associating epochs with the sky model
#[derive(Error, Debug)]
pub enum Error {
    /// Epoch observation count differs from the tracked source count
    #[error("cardinality mismatch: epoch carries {observations} observations but the sky model tracks {models} sources")]
    CardinalityMismatch { observations: usize, models: usize },

    /// A raw epoch row could not be turned into an observation
    #[error("malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    /// The cost matrix handed to the solver is unusable
    #[error("invalid solver input: {0}")]
    SolverInput(String),

    /// Configuration names a solver this crate does not provide
    #[error("unknown solver kind: {0}")]
    UnknownSolver(String),
}

impl Error {
    pub(crate) fn malformed(row: usize, reason: impl Into<String>) -> Self {
        Error::MalformedRecord {
            row,
            reason: reason.into(),
        }
    }
}
