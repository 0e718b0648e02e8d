//! # atlas-db: Database Layer for Atlas Inventory
//!
//! This crate provides database access for the Atlas Inventory system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Atlas Inventory Data Flow                       │
//! │                                                                     │
//! │  InventoryService (atlas-core)                                      │
//! │       │ ProductRepository trait                                     │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                     atlas-db (THIS CRATE)                     │ │
//! │  │                                                               │ │
//! │  │   ┌───────────────┐  ┌────────────────────┐  ┌────────────┐ │ │
//! │  │   │   Database    │  │ SqliteProduct-     │  │ Migrations │ │ │
//! │  │   │   (pool.rs)   │◄─│ Repository         │  │ (embedded) │ │ │
//! │  │   │  SqlitePool   │  │ (repository/)      │  │ 001_*.sql  │ │ │
//! │  │   └───────────────┘  └────────────────────┘  └────────────┘ │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (WAL mode)                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The SQLite ProductRepository implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use atlas_core::{InventoryService, StandardValidator};
//! use atlas_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/atlas.db")).await?;
//! let service = InventoryService::new(db.products(), StandardValidator);
//!
//! service.stock_in("PRD001", 25).await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};
pub use repository::product::SqliteProductRepository;
