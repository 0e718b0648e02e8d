//! # atlas-core: Pure Business Logic for Atlas Inventory
//!
//! This crate is the **heart** of Atlas Inventory. It contains all business
//! logic as pure functions and I/O-free orchestration.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Atlas Inventory Architecture                    │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                ★ atlas-core (THIS CRATE) ★                    │ │
//! │  │                                                               │ │
//! │  │  ┌─────────┐ ┌──────────┐ ┌────────────┐ ┌────────────────┐ │ │
//! │  │  │  types  │ │ discount │ │ validation │ │    service     │ │ │
//! │  │  │ Product │ │  tiers   │ │   rules    │ │ stock gating,  │ │ │
//! │  │  │Category │ │  + cap   │ │  (trait)   │ │ CRUD rules     │ │ │
//! │  │  └─────────┘ └──────────┘ └────────────┘ └───────┬────────┘ │ │
//! │  │                                                  │          │ │
//! │  │                  ProductRepository trait ◄───────┘          │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE RULES             │ │
//! │  └───────────────────────────────┬───────────────────────────────┘ │
//! │                                  │ implemented by                  │
//! │  ┌───────────────────────────────▼───────────────────────────────┐ │
//! │  │                   atlas-db (Database Layer)                   │ │
//! │  │            SQLite queries, migrations, repository             │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain entities (Product, Category)
//! - [`discount`] - Tiered discount engine (quantity + customer class)
//! - [`validation`] - Field validation capability and standard rules
//! - [`repository`] - Repository contract the service orchestrates against
//! - [`service`] - Inventory service (stock mutations, queries, totals)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: The discount engine is deterministic - same input = same output
//! 2. **No Direct I/O**: Storage is reached only through the repository trait
//! 3. **Boolean Service Boundary**: The service reports business-rule
//!    rejections as `false`/`None`, never as panics
//! 4. **Explicit Errors**: Entity and engine preconditions are typed errors
//!
//! ## Example Usage
//!
//! ```rust
//! use atlas_core::discount::{self, DiscountBand};
//!
//! // 10 units at 1000.0 for a REGULAR customer:
//! // 10% quantity tier + 5% class tier = 15% of 10,000
//! let amount = discount::compute_discount(1000.0, 10, "REGULAR").unwrap();
//! assert!((amount - 1500.0).abs() < 1e-9);
//!
//! let band = discount::classify_rate(0.15);
//! assert_eq!(band, DiscountBand::Medium);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod repository;
pub mod service;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use atlas_core::Product` instead of
// `use atlas_core::types::Product`

pub use error::{CoreError, CoreResult};
pub use repository::ProductRepository;
pub use service::InventoryService;
pub use types::{Category, Product};
pub use validation::{FieldValidator, StandardValidator};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum length of a product or category code (after trimming).
pub const CODE_MIN_LEN: usize = 3;

/// Maximum length of a product or category code (after trimming).
pub const CODE_MAX_LEN: usize = 10;

/// Minimum length of a product or category name (after trimming).
pub const NAME_MIN_LEN: usize = 3;

/// Maximum length of a product or category name (after trimming).
///
/// ## Business Reason
/// Keeps labels printable on receipts and shelf tags; longer names are
/// almost always data-entry mistakes.
pub const NAME_MAX_LEN: usize = 100;

/// Maximum length of a category description.
pub const DESCRIPTION_MAX_LEN: usize = 500;
