//! # CLI Commands
//!
//! Dispatch for the `init` and `start` subcommands. `start` builds the
//! whole stack: config, store backend, service, router, runtime.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use crate::catalog::CatalogService;
use crate::config::CatalogConfig;
use crate::rest_api::RestServer;
use crate::store::{CatalogStore, MemoryStore, SnapshotStore};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Write a default config file. Refuses to overwrite an existing one.
fn init(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Err(CliError::Refused(format!(
            "config already exists: {}",
            path.display()
        )));
    }

    CatalogConfig::default().save(path)?;
    println!("wrote default config to {}", path.display());
    Ok(())
}

/// Load config, build the store and service, and serve until shutdown.
fn start(path: &Path) -> CliResult<()> {
    init_tracing();

    let config = CatalogConfig::load_or_default(path)?;

    let store: Arc<dyn CatalogStore> = match &config.data_path {
        Some(data_path) => {
            tracing::info!(path = %data_path.display(), "using snapshot-backed store");
            Arc::new(SnapshotStore::open(data_path)?)
        }
        None => {
            tracing::info!("using in-memory store");
            Arc::new(MemoryStore::new())
        }
    };

    let router = RestServer::new(CatalogService::new(store)).router();
    let addr = config.bind_addr();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!(%addr, "catalog server listening");
        axum::serve(listener, router).await
    })?;

    Ok(())
}

/// Install the fmt subscriber; RUST_LOG overrides the default level.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
