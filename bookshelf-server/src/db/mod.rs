//! Database layer - connection pool, schema and book storage
//!
//! - One `PgPool` shared by every request; no `Arc<Mutex<Connection>>`
//! - Handlers see storage only through the [`BookStore`] trait

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{connect, connect_options, ConnectError};
pub use repos::{BookStore, MemoryBookStore, PgBookStore, StoreError};
pub use sqlx::PgPool;
