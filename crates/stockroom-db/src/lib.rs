//! # stockroom-db: Database Layer for Stockroom
//!
//! This crate provides database access for Stockroom and the
//! [`InventoryManager`] that keeps an in-memory snapshot of the
//! `products` table in step with the store.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Front end command (add / update / list / search / delete)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockroom-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────┐                                          │   │
//! │  │   │ InventoryManager │──── reads ────► Snapshot (stockroom-core)│   │
//! │  │   │ (inventory.rs)   │                                          │   │
//! │  │   └────────┬─────────┘                                          │   │
//! │  │            │ writes                                             │   │
//! │  │   ┌────────▼──────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │   Database    │    │  Repository   │    │    Schema    │   │   │
//! │  │   │   (pool.rs)   │◄───│ (product.rs)  │    │ (schema.rs)  │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ~/.local/share/stockroom/stockroom.db                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`inventory`] - Store-backed inventory manager
//! - [`pool`] - Connection creation and configuration
//! - [`schema`] - `products` table bootstrap
//! - [`error`] - Database and inventory error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{DbConfig, InventoryManager};
//!
//! let mut inventory = InventoryManager::open(DbConfig::new("stock.db")).await?;
//! inventory.add("Bolt", 100).await?;
//! for product in inventory.search("bolt")? {
//!     println!("{} {} {}", product.id, product.name, product.quantity);
//! }
//! inventory.close().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, InventoryError, InventoryResult};
pub use inventory::InventoryManager;
pub use pool::{Database, DbConfig};

pub use repository::product::ProductRepository;
