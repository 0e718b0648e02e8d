//! # Repository Implementations
//!
//! SQLite-backed implementations of the atlas-core repository contracts.
//!
//! ## Design Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                               │
//! │                                                                     │
//! │  InventoryService (atlas-core)                                      │
//! │       │  ProductRepository trait - total methods                    │
//! │       ▼                                                             │
//! │  SqliteProductRepository (this module)                              │
//! │       │  internal helpers return DbResult<_>                        │
//! │       │  trait surface logs failures, coerces to false/None/empty   │
//! │       ▼                                                             │
//! │  SqlitePool                                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each repository owns a clone of the pool (pools are cheap `Arc` handles).

pub mod product;
