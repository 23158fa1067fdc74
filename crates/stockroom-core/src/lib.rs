//! # stockroom-core: Pure Inventory Types for Stockroom
//!
//! This crate holds everything about inventory records that does not need
//! a database: the record type, the ordered in-memory snapshot, the search
//! predicate and the parsing of user commands.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal front end (apps/cli)                │   │
//! │  │    read line ──► Command::parse ──► dispatch ──► render table   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               stockroom-db (InventoryManager)                   │   │
//! │  │         store write ──► snapshot patch ──► view                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ snapshot  │  │  command  │  │ validation│  │   │
//! │  │   │  Product  │  │ Snapshot  │  │  Command  │  │   parse   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Product` record and its search predicate
//! - [`snapshot`] - Ordered, id-indexed in-memory mirror of the store
//! - [`command`] - Closed set of user commands and their parser
//! - [`validation`] - Input parsing used by the front end
//! - [`error`] - Validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Product, Snapshot};
//!
//! let snapshot = Snapshot::from_records(vec![
//!     Product::new(1, "Widget", 10),
//!     Product::new(2, "Gadget", 5),
//!     Product::new(3, "widget-pro", 3),
//! ]);
//!
//! let ids: Vec<i64> = snapshot.search("widget").iter().map(|p| p.id).collect();
//! assert_eq!(ids, vec![1, 3]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod command;
pub mod error;
pub mod snapshot;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use command::Command;
pub use error::ValidationError;
pub use snapshot::Snapshot;
pub use types::{Product, ProductId};
