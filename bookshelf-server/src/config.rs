//! Database configuration loaded from the process environment
//!
//! Environment variables:
//!   DB_HOST      # required
//!   DB_PORT      # required, parsed when connecting
//!   DB_USER      # required
//!   DB_NAME      # required
//!   DB_PASS      # optional (default: empty)
//!   DB_SSLMODE   # optional (default: prefer)

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

/// SSL mode used when `DB_SSLMODE` is not set
pub const DEFAULT_SSL_MODE: &str = "prefer";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load environment file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("environment variable {var} is not set")]
    Missing { var: &'static str },
}

/// Connection parameters for the book database.
///
/// Values are kept as raw strings; [`crate::db::connect`] validates them.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub db_name: String,
    pub ssl_mode: String,
}

impl DbConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| lookup(var).ok_or(ConfigError::Missing { var });

        Ok(Self {
            host: required("DB_HOST")?,
            port: required("DB_PORT")?,
            user: required("DB_USER")?,
            password: lookup("DB_PASS").unwrap_or_default(),
            db_name: required("DB_NAME")?,
            ssl_mode: lookup("DB_SSLMODE")
                .filter(|mode| !mode.is_empty())
                .unwrap_or_else(|| DEFAULT_SSL_MODE.to_string()),
        })
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("db_name", &self.db_name)
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}

/// Load variables from an env file into the process environment.
///
/// Variables that are already set are not overwritten. A missing or
/// unparsable file is an error.
pub fn load_env_file(path: &Path) -> Result<(), ConfigError> {
    dotenvy::from_path(path).map_err(|source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loaded configuration from: {}", path.display());
    Ok(())
}
