//! HTTP server command

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use bookshelf_server::db::PgBookStore;
use bookshelf_server::{run_server, AppState, ServerConfig};

/// Run the HTTP server (blocks until the process is killed)
pub async fn run_serve(env_file: &Path) -> Result<()> {
    let pool = super::prepare_database(env_file).await?;

    let state = AppState::new(Arc::new(PgBookStore::new(pool)));
    let config = ServerConfig::default();
    tracing::info!("Starting bookshelf server on {}", config.bind_addr);

    run_server(state, config).await.context("Server error")?;
    Ok(())
}
