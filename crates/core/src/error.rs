//! Error types shared across the workspace.

use std::time::Duration;
use thiserror::Error;

/// All errors surfaced by tables and changesets.
///
/// Changesets introduce no failure modes of their own: anything raised by
/// the storage collaborator's primitives propagates unmodified through
/// `execute`.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage collaborator failure
    #[error("storage error: {0}")]
    Storage(String),

    /// The in-memory binding could not acquire its write lock in time
    #[error("write lock not acquired within {0:?}")]
    LockTimeout(Duration),

    /// A record could not be built from the given input
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Result type for table and changeset operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is retryable.
    ///
    /// Lock timeouts may succeed on retry once the contending writer has
    /// released the lock. Retrying is entirely the caller's decision; the
    /// core makes exactly one attempt per call.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::LockTimeout(_))
    }
}
