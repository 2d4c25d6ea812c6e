//! # Server Configuration
//!
//! JSON config file for the catalog server. Every field has a default, so
//! a missing file or a partial file is fine.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse: {0}")]
    Parse(String),
}

/// Catalog server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Bind address for the HTTP server.
    pub bind_address: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Snapshot file path. The store is in-memory when unset.
    pub data_path: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
            data_path: None,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))
    }

    /// Load configuration, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Write the configuration as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let bytes = serde_json::to_vec_pretty(self)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Get the full bind address with port.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
