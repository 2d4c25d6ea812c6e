//! # Store Errors
//!
//! Failures at the persistence boundary. `UnknownId` is the only
//! store-level contract violation; everything else is infrastructure.

use thiserror::Error;

use crate::catalog::FrameworkId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Update or delete targeted an id that is not present
    #[error("no record with id {0}")]
    UnknownId(FrameworkId),

    /// The storage medium failed
    #[error("snapshot io: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file exists but cannot be decoded. The store refuses
    /// to open rather than silently resetting state.
    #[error("snapshot corrupt: {0}")]
    Corrupt(String),
}
