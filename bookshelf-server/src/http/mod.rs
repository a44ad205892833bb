//! HTTP server layer
//!
//! Axum server with:
//! - Book routes under `/api`
//! - Request tracing
//! - JSON `{ "error": ... }` envelopes for every failure

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::{ApiError, BookOp};
pub use server::{build_router, run_server, AppState, ServerConfig};
