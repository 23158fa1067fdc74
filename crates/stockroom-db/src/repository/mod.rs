//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  InventoryManager                                                      │
//! │       │                                                                 │
//! │       │  db.products().insert("Bolt", 100)                             │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list_all(&self)                                                   │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── insert(&self, name, quantity)                                     │
//! │  ├── update_quantity(&self, id, quantity)                              │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  Parameterized SQL                                             │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD

pub mod product;
