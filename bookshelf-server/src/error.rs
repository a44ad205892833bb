//! Startup error types for bookshelf-server
//!
//! Request-time failures never reach this type; they are rendered by
//! [`crate::http::ApiError`] at the handler boundary.

use thiserror::Error;

pub use crate::config::ConfigError;
pub use crate::db::migrations::MigrationError;
pub use crate::db::pool::ConnectError;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors raised while bringing the service up
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("couldn't connect to db: {0}")]
    Connection(#[from] ConnectError),

    #[error("couldn't migrate db: {0}")]
    Migration(#[from] MigrationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
