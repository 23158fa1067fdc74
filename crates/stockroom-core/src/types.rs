//! # Domain Types
//!
//! The single record type of Stockroom.
//!
//! ```text
//! ┌─────────────────┐
//! │    Product      │
//! │  ─────────────  │
//! │  id (i64)       │  assigned by the store, never reused
//! │  name           │
//! │  quantity (i64) │
//! └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Store-assigned product identifier.
///
/// Ids come from SQLite `AUTOINCREMENT`, so they are strictly increasing
/// and never reused after a delete.
pub type ProductId = i64;

// =============================================================================
// Product
// =============================================================================

/// A product held in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier assigned by the store on creation.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Units in stock. Conceptually non-negative, not enforced.
    pub quantity: i64,
}

impl Product {
    /// Creates a product record.
    pub fn new(id: ProductId, name: impl Into<String>, quantity: i64) -> Self {
        Product {
            id,
            name: name.into(),
            quantity,
        }
    }

    /// Search predicate.
    ///
    /// A record matches when `term` is exactly its id written in decimal,
    /// or when `term` is a case-insensitive substring of its name.
    ///
    /// ## Empty Term
    /// The empty string is a substring of every name, so `matches("")` is
    /// always `true`. Callers that do not want "match everything" must
    /// filter empty input themselves.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::Product;
    ///
    /// let p = Product::new(12, "Widget", 3);
    /// assert!(p.matches("12"));
    /// assert!(p.matches("WIDG"));
    /// assert!(!p.matches("1"));
    /// ```
    pub fn matches(&self, term: &str) -> bool {
        if self.id.to_string() == term {
            return true;
        }
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
