//! PostgreSQL book store
//!
//! - create: INSERT ... RETURNING (single round trip)
//! - delete: hard delete, zero matched rows is not an error

use async_trait::async_trait;
use sqlx::PgPool;

use super::{BookStore, StoreError};
use crate::models::{Book, BookId, NewBook};

/// Book store backed by the `books` table
#[derive(Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn create(&self, book: NewBook) -> Result<Book, StoreError> {
        let book: Book = sqlx::query_as(
            r#"
            INSERT INTO books (author, title, publisher)
            VALUES ($1, $2, $3)
            RETURNING id, author, title, publisher
            "#,
        )
        .bind(book.author)
        .bind(book.title)
        .bind(book.publisher)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    async fn delete(&self, id: BookId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn get(&self, id: BookId) -> Result<Book, StoreError> {
        sqlx::query_as::<_, Book>(
            r#"
            SELECT id, author, title, publisher
            FROM books
            WHERE id = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let books: Vec<Book> =
            sqlx::query_as("SELECT id, author, title, publisher FROM books ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(books)
    }
}
