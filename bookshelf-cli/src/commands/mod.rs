//! Subcommand implementations

mod migrate;
mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use std::path::Path;

use anyhow::{Context, Result};

use bookshelf_server::config::load_env_file;
use bookshelf_server::db::{connect, migrations, PgPool};
use bookshelf_server::DbConfig;

/// Load configuration, connect and migrate. Every failure here is fatal.
async fn prepare_database(env_file: &Path) -> Result<PgPool> {
    load_env_file(env_file).context("couldn't load environment")?;
    let config = DbConfig::from_env().context("couldn't read database configuration")?;
    tracing::debug!(?config, "Database configuration");

    let pool = connect(&config).await.context("couldn't connect to db")?;
    migrations::run(&pool).await.context("couldn't migrate db")?;

    Ok(pool)
}
