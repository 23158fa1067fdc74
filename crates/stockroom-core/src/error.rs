//! # Error Types
//!
//! Input errors raised while turning raw user text into commands.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  └── ValidationError  - Malformed user input                           │
//! │                                                                         │
//! │  stockroom-db errors (separate crate)                                  │
//! │  ├── DbError          - Database operation failures                    │
//! │  └── InventoryError   - Inventory manager contract                     │
//! │                                                                         │
//! │  Front end errors (in app)                                             │
//! │  └── CliError         - What the user sees                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation errors belong to the front end. The inventory manager never
//! produces them; it accepts whatever values it is given.

use thiserror::Error;

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Text that should be an integer is not one.
    #[error("Invalid {field}: '{value}' is not a valid integer")]
    InvalidInteger { field: String, value: String },

    /// The first word of the line is not a known command.
    #[error("Unknown command: '{0}' (type 'help' for a list)")]
    UnknownCommand(String),
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    pub fn invalid_integer(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::InvalidInteger {
            field: field.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::required("name").to_string(), "name is required");
        assert_eq!(
            ValidationError::invalid_integer("quantity", "ten").to_string(),
            "Invalid quantity: 'ten' is not a valid integer"
        );
        assert_eq!(
            ValidationError::UnknownCommand("frobnicate".to_string()).to_string(),
            "Unknown command: 'frobnicate' (type 'help' for a list)"
        );
    }
}
