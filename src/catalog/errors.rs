//! # Catalog Errors
//!
//! Domain failure taxonomy for the catalog service. All variants are raised
//! at the point of violation and propagate unhandled to the caller; mapping
//! to a transport status lives in the REST layer.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog domain failures
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Create targeted a name that is already cataloged
    #[error("framework already exists: {0}")]
    DuplicateName(String),

    /// Add-version targeted a version already present on the record
    #[error("version {version} already exists for framework {name}")]
    DuplicateVersion { name: String, version: String },

    /// A mutating operation targeted a nonexistent id or name
    #[error("framework does not exist: {0}")]
    NotFound(String),

    /// The store could not complete an operation for reasons outside
    /// domain logic. Always propagated, never retried here.
    #[error(transparent)]
    Store(#[from] StoreError),
}
