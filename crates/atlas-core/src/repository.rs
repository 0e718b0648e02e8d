//! # Repository Contract
//!
//! The persistence port the inventory service orchestrates against.
//!
//! ## Contract Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     ProductRepository                               │
//! │                                                                     │
//! │  InventoryService ──► trait methods ──► adapter (atlas-db SQLite,   │
//! │                                          or an in-memory fake)      │
//! │                                                                     │
//! │  Every method is TOTAL:                                             │
//! │  • absence is `None` / empty Vec, never an error                    │
//! │  • write outcomes are `true` / `false`                              │
//! │  • adapter-level failures are logged by the adapter and coerced     │
//! │    to the failure value - they never cross this boundary as panics  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! The service performs a non-atomic read-then-write for stock mutations
//! (`find_by_code` followed by `update_stock`). Implementations must
//! serialize writes per product code - the bundled SQLite adapter satisfies
//! this with SQLite's single-writer model. Without that guarantee two
//! concurrent `stock_out` calls can both observe the same starting stock.

use async_trait::async_trait;

use crate::types::Product;

/// Storage operations over products, keyed by product code.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Looks up a product by its code.
    async fn find_by_code(&self, code: &str) -> Option<Product>;

    /// Persists a product (insert or overwrite by code).
    async fn save(&self, product: &Product) -> bool;

    /// Deletes a product by code. `false` when nothing was deleted.
    async fn delete(&self, code: &str) -> bool;

    /// Sets a product's stock to an absolute value.
    async fn update_stock(&self, code: &str, new_stock: i64) -> bool;

    /// Returns every stored product, active or not.
    async fn find_all(&self) -> Vec<Product>;

    /// Products whose name starts with `prefix`.
    async fn find_by_name_prefix(&self, prefix: &str) -> Vec<Product>;

    /// Products filed under the given category label.
    async fn find_by_category(&self, category: &str) -> Vec<Product>;

    /// Active products with positive stock at or below their threshold.
    async fn find_low_stock(&self) -> Vec<Product>;

    /// Active products with zero stock.
    async fn find_out_of_stock(&self) -> Vec<Product>;
}
