//! Schema-only command: create the books table and exit

use std::path::Path;

use anyhow::Result;

pub async fn run_migrate(env_file: &Path) -> Result<()> {
    let pool = super::prepare_database(env_file).await?;
    pool.close().await;
    tracing::info!("Database is up to date");
    Ok(())
}
