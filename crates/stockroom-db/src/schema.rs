//! # Schema Bootstrap
//!
//! Creates the `products` table on first run.
//!
//! ## How It Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Schema Bootstrap                                   │
//! │                                                                         │
//! │  Database::new()                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS products (...)                             │
//! │       │                                                                 │
//! │       ├── fresh file?   table is created                               │
//! │       └── existing file? statement is a no-op, table used as-is        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no versioning and no migration step. A file created by an
//! older build is opened unchanged.
//!
//! `AUTOINCREMENT` matters: without it SQLite may hand out the id of a
//! deleted max row again. With it ids are strictly increasing for the life
//! of the file, which the snapshot's ordering relies on.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};

/// DDL for the products table.
pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT    NOT NULL,
    quantity INTEGER NOT NULL
)
"#;

/// Ensures the `products` table exists.
///
/// Idempotent: safe to run on every startup.
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    info!("Ensuring products schema");

    sqlx::query(CREATE_PRODUCTS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    Ok(())
}

/// Returns whether the `products` table exists.
///
/// ## Usage
/// For diagnostics and tests.
pub async fn products_table_exists(pool: &SqlitePool) -> DbResult<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'products'",
    )
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}
