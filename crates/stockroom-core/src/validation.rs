//! # Validation Module
//!
//! Input parsing for the front end.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (THIS MODULE)                                      │
//! │  ├── Empty name rejected                                               │
//! │  └── Integer parsing of ids and quantities                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Inventory manager                                            │
//! │  └── No validation; accepts what it is given                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_integer, validate_product_name};
//!
//! assert_eq!(parse_integer("quantity", " 12 ").unwrap(), 12);
//! assert!(parse_integer("quantity", "12.5").is_err());
//! assert!(validate_product_name("   ").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses a signed integer from user text.
///
/// Surrounding whitespace is ignored. Empty text is reported as
/// `Required`, anything else that is not an `i64` as `InvalidInteger`.
pub fn parse_integer(field: &str, text: &str) -> ValidationResult<i64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::required(field));
    }

    text.parse::<i64>()
        .map_err(|_| ValidationError::invalid_integer(field, text))
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// No length limit: the store column is unbounded `TEXT`.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::required("name"));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("id", "7").unwrap(), 7);
        assert_eq!(parse_integer("quantity", "-3").unwrap(), -3);
        assert_eq!(parse_integer("quantity", "  100\t").unwrap(), 100);

        assert_eq!(
            parse_integer("quantity", "").unwrap_err(),
            ValidationError::required("quantity")
        );
        assert_eq!(
            parse_integer("id", "abc").unwrap_err(),
            ValidationError::invalid_integer("id", "abc")
        );
        assert!(parse_integer("id", "1.5").is_err());
        assert!(parse_integer("id", "99999999999999999999").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Bolt").is_ok());
        assert!(validate_product_name(" Nut ").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
    }
}
