//! # CLI Errors

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI failures
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Refusal to clobber existing state (e.g. init over an existing config)
    #[error("{0}")]
    Refused(String),
}
