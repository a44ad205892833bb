//! Schema migration for the books table
//!
//! Creates the table when absent, adds any missing text column to an existing
//! one, then checks every column has the type the book queries decode.

use sqlx::PgPool;
use thiserror::Error;

/// Expected `books` columns and their `information_schema` data types
const BOOK_COLUMNS: &[(&str, &str)] = &[
    ("id", "bigint"),
    ("author", "text"),
    ("title", "text"),
    ("publisher", "text"),
];

/// Columns that can be added to an existing table
const ADDABLE_COLUMNS: &[&str] = &["author", "title", "publisher"];

#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("failed to migrate books table: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("books table has no '{column}' column")]
    MissingColumn { column: &'static str },

    #[error("books.{column} is {found}, expected {expected}")]
    ColumnType {
        column: &'static str,
        expected: &'static str,
        found: String,
    },
}

/// Ensure the `books` table exists with the book columns. Safe to run on
/// every startup.
pub async fn run(pool: &PgPool) -> Result<(), MigrationError> {
    tracing::info!("Running book migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id BIGSERIAL PRIMARY KEY,
            author TEXT,
            title TEXT,
            publisher TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    for column in ADDABLE_COLUMNS {
        sqlx::query(&format!(
            "ALTER TABLE books ADD COLUMN IF NOT EXISTS {} TEXT",
            column
        ))
        .execute(pool)
        .await?;
    }

    verify_columns(pool).await?;

    tracing::info!("Book migrations complete");
    Ok(())
}

async fn verify_columns(pool: &PgPool) -> Result<(), MigrationError> {
    let found: Vec<(String, String)> = sqlx::query_as(
        r#"
        SELECT column_name::text, data_type::text
        FROM information_schema.columns
        WHERE table_schema = current_schema() AND table_name = 'books'
        "#,
    )
    .fetch_all(pool)
    .await?;

    for &(column, expected) in BOOK_COLUMNS {
        let (_, data_type) = found
            .iter()
            .find(|(name, _)| name == column)
            .ok_or(MigrationError::MissingColumn { column })?;

        if data_type != expected {
            return Err(MigrationError::ColumnType {
                column,
                expected,
                found: data_type.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbConfig;
    use crate::db::pool::{connect_options, create_pool_with_options};
    use crate::db::{connect, BookStore, PgBookStore};
    use crate::models::NewBook;

    /// Pool whose connections resolve unqualified names in a fresh schema.
    async fn schema_pool(admin: &PgPool, config: &DbConfig, schema: &str) -> PgPool {
        sqlx::query(&format!("DROP SCHEMA IF EXISTS {} CASCADE", schema))
            .execute(admin)
            .await
            .expect("drop schema failed");
        sqlx::query(&format!("CREATE SCHEMA {}", schema))
            .execute(admin)
            .await
            .expect("create schema failed");

        let options = connect_options(config)
            .expect("invalid DB_* variables")
            .options([("search_path", schema)]);
        create_pool_with_options(options, 1)
            .await
            .expect("pool creation failed")
    }

    async fn drop_schema(admin: &PgPool, schema: &str) {
        sqlx::query(&format!("DROP SCHEMA IF EXISTS {} CASCADE", schema))
            .execute(admin)
            .await
            .expect("drop schema failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migration_is_idempotent() {
        let config = DbConfig::from_env().expect("DB_* variables required");
        let pool = connect(&config).await.expect("pool creation failed");

        run(&pool).await.expect("first migration failed");
        run(&pool).await.expect("second migration failed");

        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = 'books')",
        )
        .fetch_one(&pool)
        .await
        .expect("query failed");
        assert!(exists);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migration_adds_missing_columns() {
        let config = DbConfig::from_env().expect("DB_* variables required");
        let admin = connect(&config).await.expect("pool creation failed");
        let schema = "bookshelf_migrate_missing";
        let pool = schema_pool(&admin, &config, schema).await;

        sqlx::query("CREATE TABLE books (id BIGSERIAL PRIMARY KEY, author TEXT, title TEXT)")
            .execute(&pool)
            .await
            .expect("create drifted table failed");

        run(&pool).await.expect("migration failed");

        let store = PgBookStore::new(pool.clone());
        let created = store
            .create(NewBook {
                author: Some("A".into()),
                title: Some("T".into()),
                publisher: Some("P".into()),
            })
            .await
            .expect("create after migration failed");
        assert_eq!(created.publisher.as_deref(), Some("P"));
        assert_eq!(store.list().await.expect("list failed").len(), 1);

        pool.close().await;
        drop_schema(&admin, schema).await;
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migration_rejects_wrong_column_type() {
        let config = DbConfig::from_env().expect("DB_* variables required");
        let admin = connect(&config).await.expect("pool creation failed");
        let schema = "bookshelf_migrate_type";
        let pool = schema_pool(&admin, &config, schema).await;

        sqlx::query(
            "CREATE TABLE books (id BIGSERIAL PRIMARY KEY, author INTEGER, title TEXT, publisher TEXT)",
        )
        .execute(&pool)
        .await
        .expect("create drifted table failed");

        let err = run(&pool).await.unwrap_err();
        assert!(matches!(
            err,
            MigrationError::ColumnType {
                column: "author",
                expected: "text",
                ..
            }
        ));

        pool.close().await;
        drop_schema(&admin, schema).await;
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migration_rejects_missing_id() {
        let config = DbConfig::from_env().expect("DB_* variables required");
        let admin = connect(&config).await.expect("pool creation failed");
        let schema = "bookshelf_migrate_id";
        let pool = schema_pool(&admin, &config, schema).await;

        sqlx::query("CREATE TABLE books (author TEXT, title TEXT, publisher TEXT)")
            .execute(&pool)
            .await
            .expect("create drifted table failed");

        let err = run(&pool).await.unwrap_err();
        assert!(matches!(err, MigrationError::MissingColumn { column: "id" }));

        pool.close().await;
        drop_schema(&admin, schema).await;
    }
}
