//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use thiserror::Error;

use crate::config::DbConfig;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("invalid port '{value}'")]
    InvalidPort { value: String },

    #[error("invalid ssl mode '{value}'")]
    InvalidSslMode { value: String },

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Translate a [`DbConfig`] into sqlx connect options.
///
/// Fails on a malformed port or SSL mode without touching the network.
pub fn connect_options(config: &DbConfig) -> Result<PgConnectOptions, ConnectError> {
    let port: u16 = config
        .port
        .trim()
        .parse()
        .map_err(|_| ConnectError::InvalidPort {
            value: config.port.clone(),
        })?;

    let ssl_mode =
        PgSslMode::from_str(config.ssl_mode.trim()).map_err(|_| ConnectError::InvalidSslMode {
            value: config.ssl_mode.clone(),
        })?;

    let mut options = PgConnectOptions::new()
        .host(&config.host)
        .port(port)
        .username(&config.user)
        .database(&config.db_name)
        .ssl_mode(ssl_mode);

    if !config.password.is_empty() {
        options = options.password(&config.password);
    }

    Ok(options)
}

/// Open a PostgreSQL connection pool for `config`.
///
/// # Errors
///
/// Returns an error if the configuration is malformed or the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = connect(&DbConfig::from_env()?).await?;
/// ```
pub async fn connect(config: &DbConfig) -> Result<PgPool, ConnectError> {
    let options = connect_options(config)?;

    tracing::info!(
        host = %config.host,
        port = %config.port,
        database = %config.db_name,
        "Connecting to database"
    );

    let pool = create_pool_with_options(options, DEFAULT_MAX_CONNECTIONS).await?;
    Ok(pool)
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `options` - PostgreSQL connect options
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    options: PgConnectOptions,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}
