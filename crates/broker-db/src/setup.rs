//! Store setup and initialization.
//!
//! This module provides [`open_store`] for connecting to a `SQLite` database
//! and ensuring the document schema exists. The composition root calls it
//! with the configured URL and database name.

use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::repositories::SqliteDocumentStore;

/// Connects to the `SQLite` database at `url` and ensures the schema exists.
///
/// The database file is created if it does not exist. `name` is the logical
/// database name reported by the store. An in-memory database only lives
/// while a connection to it is open, so its pool keeps one connection that
/// never expires.
///
/// # Errors
///
/// Returns an error if:
/// - `url` is not a valid `SQLite` connection URL
/// - The database file cannot be opened or created
/// - Schema creation fails
pub async fn open_store(url: &str, name: &str) -> Result<SqliteDocumentStore> {
    let options = SqliteConnectOptions::from_str(url)
        .with_context(|| format!("invalid database URL {url:?}"))?
        .create_if_missing(true);

    let pool = if is_in_memory(url) {
        SqlitePoolOptions::new()
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePool::connect_with(options).await?
    };
    create_schema(&pool).await?;

    Ok(SqliteDocumentStore::new(pool, name))
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Opens a fresh in-memory store with the production schema.
///
/// The pool holds a single connection that never expires, so the database
/// lives as long as the store.
#[cfg(any(test, feature = "test-utils"))]
pub async fn open_test_store() -> Result<SqliteDocumentStore> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    Ok(SqliteDocumentStore::new(pool, "test"))
}

/// Creates the document schema.
///
/// Safe to call multiple times as all statements use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            id TEXT PRIMARY KEY NOT NULL,
            collection TEXT NOT NULL,
            body TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection)")
        .execute(pool)
        .await?;

    Ok(())
}
