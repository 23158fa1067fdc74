//! # Front End Error Type
//!
//! Unified error type for command handling.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  input line                                                             │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Command::parse ── ValidationError ──┐                                  │
//! │      │                               │                                  │
//! │      ▼                               ▼                                  │
//! │  dispatch ──────── InventoryError ─► CliError { code, message }         │
//! │      │                               │                                  │
//! │      ▼                               ▼                                  │
//! │  render                      printed on stderr (or as JSON)             │
//! │                              fatal codes end the session                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use stockroom_core::ValidationError;
use stockroom_db::InventoryError;

/// Error reported to the user.
///
/// ## Serialization
/// With `--json`, this is what gets printed when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Invalid quantity. Enter a valid integer."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input could not be parsed
    ValidationError,

    /// The database could not be opened
    StorageUnavailable,

    /// A write to the database failed
    StorageError,

    /// The inventory was used outside its open state
    InvalidState,

    /// Configuration or terminal problem
    Internal,
}

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::Internal, message)
    }

    /// Whether the session has to end after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::StorageUnavailable | ErrorCode::InvalidState | ErrorCode::Internal
        )
    }
}

/// Converts input errors to plain user messages.
impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidInteger { field, .. } => {
                CliError::validation(format!("Invalid {}. Enter a valid integer.", field))
            }
            ValidationError::Required { field } => {
                CliError::validation(format!("Please enter a {}.", field))
            }
            ValidationError::UnknownCommand(_) => CliError::validation(err.to_string()),
        }
    }
}

/// Converts inventory errors to API errors.
impl From<InventoryError> for CliError {
    fn from(err: InventoryError) -> Self {
        match &err {
            InventoryError::StorageUnavailable(e) => {
                tracing::error!("Storage unavailable: {}", e);
                CliError::new(ErrorCode::StorageUnavailable, err.to_string())
            }
            InventoryError::StorageWriteError { operation, source } => {
                tracing::error!(operation, "Storage write failed: {}", source);
                CliError::new(
                    ErrorCode::StorageError,
                    "Could not save the change. Nothing was modified.",
                )
            }
            InventoryError::StorageReadError(e) => {
                tracing::error!("Storage read failed: {}", e);
                CliError::new(ErrorCode::StorageError, "Could not read the database.")
            }
            InventoryError::InvalidState { .. } => {
                CliError::new(ErrorCode::InvalidState, err.to_string())
            }
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_db::DbError;

    #[test]
    fn test_validation_messages() {
        let err: CliError = ValidationError::invalid_integer("quantity", "ten").into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Invalid quantity. Enter a valid integer.");
        assert!(!err.is_fatal());

        let err: CliError = ValidationError::required("name").into();
        assert_eq!(err.message, "Please enter a name.");
    }

    #[test]
    fn test_inventory_errors() {
        let err: CliError = InventoryError::InvalidState {
            operation: "list",
            state: "closed",
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidState);
        assert!(err.is_fatal());

        let err: CliError = InventoryError::StorageWriteError {
            operation: "insert",
            source: DbError::QueryFailed("disk full".to_string()),
        }
        .into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(!err.is_fatal());

        let err: CliError =
            InventoryError::StorageReadError(DbError::QueryFailed("disk I/O error".to_string()))
                .into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(err.message, "Could not read the database.");
        assert!(!err.is_fatal());

        let err: CliError =
            InventoryError::StorageUnavailable(DbError::ConnectionFailed("no file".to_string()))
                .into();
        assert_eq!(err.code, ErrorCode::StorageUnavailable);
        assert!(err.is_fatal());
    }

    #[test]
    fn test_serializes_code() {
        let err = CliError::validation("bad");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"code":"VALIDATION_ERROR","message":"bad"}"#);
    }
}
