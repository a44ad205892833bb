//! Book storage behind a trait so handlers can run against PostgreSQL or an
//! in-process store.

pub mod books;
pub mod memory;

use async_trait::async_trait;

use crate::models::{Book, BookId, NewBook};

pub use books::PgBookStore;
pub use memory::MemoryBookStore;

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("not found: book '{id}'")]
    NotFound { id: BookId },

    #[error("invalid book id '{raw}'")]
    InvalidId { raw: String },

    #[error("storage unavailable")]
    Unavailable,
}

/// Persistent book storage shared by all requests
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Insert a book; storage assigns the id.
    async fn create(&self, book: NewBook) -> Result<Book, StoreError>;

    /// Delete by id, returning the number of rows removed (0 when nothing matched).
    async fn delete(&self, id: BookId) -> Result<u64, StoreError>;

    /// First book with the given id.
    async fn get(&self, id: BookId) -> Result<Book, StoreError>;

    /// All books, ordered by id.
    async fn list(&self) -> Result<Vec<Book>, StoreError>;
}
