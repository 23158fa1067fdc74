//! # Database Error Types
//!
//! Error types for database operations and for the inventory manager.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError ← Adds categorization (connection, schema, query)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InventoryError ← Says WHICH manager step failed                       │
//! │       │           (open / write / read / wrong state)                  │
//! │       ▼                                                                 │
//! │  CliError (in app) ← Printed for the user                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// DbError
// =============================================================================

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide a coarse category for
/// logging and user feedback.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created (missing directory, permissions)
    /// - File is not a SQLite database
    /// - Connection was closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The `products` table could not be ensured.
    #[error("Schema setup failed: {0}")]
    SchemaFailed(String),

    /// Query execution failed.
    ///
    /// ## When This Occurs
    /// - Constraint violation (e.g. NULL name)
    /// - Disk full, database locked, corruption
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Timed out waiting for the single connection.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::Io             → DbError::ConnectionFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// InventoryError
// =============================================================================

/// Errors surfaced by [`InventoryManager`](crate::InventoryManager).
///
/// "Not found" is deliberately absent: updating or deleting an unknown id
/// is a silent no-op.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The store could not be opened, its schema ensured, or its rows loaded.
    /// Fatal for the manager instance.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[source] DbError),

    /// An insert, update or delete failed. The snapshot was not touched.
    #[error("Storage write failed ({operation}): {source}")]
    StorageWriteError {
        operation: &'static str,
        #[source]
        source: DbError,
    },

    /// A direct read of the store failed.
    #[error("Storage read failed: {0}")]
    StorageReadError(#[source] DbError),

    /// The manager is not open (never initialized, or already closed).
    #[error("Invalid state: cannot {operation} while manager is {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
}

impl InventoryError {
    pub(crate) fn write(operation: &'static str, source: DbError) -> Self {
        InventoryError::StorageWriteError { operation, source }
    }

    /// Whether the manager instance can no longer be used.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            InventoryError::StorageUnavailable(_) | InventoryError::InvalidState { .. }
        )
    }
}

/// Result type for inventory manager operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

// =============================================================================
// Unit Tests
// =============================================================================
