//! bookshelf-server: HTTP API over a PostgreSQL `books` table
//!
//! Wiring order used by the `bookshelf` binary:
//! config → [`db::connect`] → [`db::migrations::run`] → [`http::run_server`].

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;

pub use config::DbConfig;
pub use error::{Error, Result};
pub use http::{build_router, run_server, AppState, ServerConfig};
