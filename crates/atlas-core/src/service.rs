//! # Inventory Service
//!
//! Validated stock mutations and queries against a repository collaborator.
//!
//! ## Responsibility Split
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     InventoryService                                │
//! │                                                                     │
//! │  caller ──► service (THIS MODULE) ──► ProductRepository             │
//! │                                                                     │
//! │  The service implements the RULES:                                  │
//! │  • field validation gates (via the injected FieldValidator)         │
//! │  • existence and duplicate checks                                   │
//! │  • activation gating (inactive products block mutations)            │
//! │  • non-negative stock arithmetic                                    │
//! │                                                                     │
//! │  The repository implements the STORAGE. The service never           │
//! │  reimplements persistence.                                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Reporting
//! Every operation reports business-rule rejection as `false` (or `None` /
//! empty), matching the repository's total contract. Callers distinguish
//! "rejected" from "not found" by sequencing additional lookups if they
//! care; nothing at this boundary raises.

use tracing::{debug, warn};

use crate::repository::ProductRepository;
use crate::types::Product;
use crate::validation::FieldValidator;

/// Orchestrates inventory rules over a repository and a validator.
///
/// Both collaborators are injected so tests can substitute an in-memory
/// repository and a canned validator.
///
/// ## Usage
/// ```rust,ignore
/// let service = InventoryService::new(db.products(), StandardValidator);
/// if service.stock_out("PRD001", 3).await {
///     // stock level persisted as current - 3
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InventoryService<R, V> {
    repository: R,
    validator: V,
}

impl<R, V> InventoryService<R, V>
where
    R: ProductRepository,
    V: FieldValidator,
{
    /// Creates a new service over the given collaborators.
    pub fn new(repository: R, validator: V) -> Self {
        InventoryService {
            repository,
            validator,
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Registers a new product.
    ///
    /// Fails when the record fails field validation or a product with the
    /// same code already exists; otherwise returns the repository's own
    /// success signal.
    pub async fn add_product(&self, product: &Product) -> bool {
        if !self.validator.is_valid_product(product) {
            warn!(code = %product.code, "Rejecting product: failed field validation");
            return false;
        }

        if self.repository.find_by_code(&product.code).await.is_some() {
            warn!(code = %product.code, "Rejecting product: code already exists");
            return false;
        }

        debug!(code = %product.code, "Saving new product");
        self.repository.save(product).await
    }

    /// Removes a product.
    ///
    /// A product may only be removed once its stock is fully depleted;
    /// anything still on hand has to be stocked out (or written off) first.
    pub async fn remove_product(&self, code: &str) -> bool {
        if !self.validator.is_valid_code(code) {
            return false;
        }

        let Some(product) = self.repository.find_by_code(code).await else {
            return false;
        };

        if product.stock > 0 {
            warn!(code = %code, stock = product.stock, "Refusing to remove product with stock on hand");
            return false;
        }

        debug!(code = %code, "Deleting product");
        self.repository.delete(code).await
    }

    /// Books `quantity` units out of stock.
    ///
    /// Fails fast on a non-positive quantity (no repository lookup), on a
    /// missing or inactive product, and when the request exceeds current
    /// stock. On success the absolute new level is persisted.
    pub async fn stock_out(&self, code: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return false;
        }

        let Some(product) = self.repository.find_by_code(code).await else {
            return false;
        };

        if !product.is_active {
            warn!(code = %code, "Refusing stock-out on inactive product");
            return false;
        }

        if quantity > product.stock {
            warn!(
                code = %code,
                available = product.stock,
                requested = quantity,
                "Refusing stock-out: insufficient stock"
            );
            return false;
        }

        let new_stock = product.stock - quantity;
        debug!(code = %code, quantity, new_stock, "Booking stock out");
        self.repository.update_stock(code, new_stock).await
    }

    /// Books `quantity` units into stock. No upper bound.
    ///
    /// Symmetric to [`stock_out`](Self::stock_out) for the quantity, lookup
    /// and activation gates.
    pub async fn stock_in(&self, code: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return false;
        }

        let Some(product) = self.repository.find_by_code(code).await else {
            return false;
        };

        if !product.is_active {
            warn!(code = %code, "Refusing stock-in on inactive product");
            return false;
        }

        let new_stock = product.stock + quantity;
        debug!(code = %code, quantity, new_stock, "Booking stock in");
        self.repository.update_stock(code, new_stock).await
    }

    /// Sets a product's stock to an absolute value.
    ///
    /// Distinct from `stock_in`/`stock_out`, which are deltas: this is the
    /// stocktake correction path.
    pub async fn update_stock(&self, code: &str, new_stock: i64) -> bool {
        if !self.validator.is_valid_code(code) || new_stock < 0 {
            return false;
        }

        if self.repository.find_by_code(code).await.is_none() {
            return false;
        }

        debug!(code = %code, new_stock, "Setting absolute stock level");
        self.repository.update_stock(code, new_stock).await
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Looks up a product by code. Malformed codes yield `None`, not errors.
    pub async fn find_by_code(&self, code: &str) -> Option<Product> {
        if !self.validator.is_valid_code(code) {
            return None;
        }
        self.repository.find_by_code(code).await
    }

    /// Products whose name starts with `prefix`. Pass-through, no gate.
    pub async fn find_by_name_prefix(&self, prefix: &str) -> Vec<Product> {
        self.repository.find_by_name_prefix(prefix).await
    }

    /// Products filed under a category label. Pass-through, no gate.
    pub async fn find_by_category(&self, category: &str) -> Vec<Product> {
        self.repository.find_by_category(category).await
    }

    /// Sum of stock across active products.
    ///
    /// Inactive products are excluded from the sum entirely, not merely
    /// zero-weighted.
    pub async fn total_stock_on_hand(&self) -> i64 {
        self.repository
            .find_all()
            .await
            .iter()
            .filter(|p| p.is_active)
            .map(|p| p.stock)
            .sum()
    }

    /// Sum of `price * stock` across active products.
    pub async fn total_inventory_value(&self) -> f64 {
        self.repository
            .find_all()
            .await
            .iter()
            .filter(|p| p.is_active)
            .map(|p| p.price * p.stock as f64)
            .sum()
    }

    /// Active products with positive stock at or below their threshold.
    pub async fn low_stock_products(&self) -> Vec<Product> {
        self.repository.find_low_stock().await
    }

    /// Active products with zero stock.
    pub async fn out_of_stock_products(&self) -> Vec<Product> {
        self.repository.find_out_of_stock().await
    }

    /// Every stored product, active or not.
    pub async fn all_products(&self) -> Vec<Product> {
        self.repository.find_all().await
    }

    /// Only the active products.
    pub async fn active_products(&self) -> Vec<Product> {
        self.repository
            .find_all()
            .await
            .into_iter()
            .filter(|p| p.is_active)
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::ProductRepository;
    use crate::validation::StandardValidator;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// In-memory repository fake backed by a BTreeMap keyed by code.
    #[derive(Debug, Default)]
    struct MemoryRepository {
        products: Mutex<BTreeMap<String, Product>>,
    }

    impl MemoryRepository {
        fn with(products: impl IntoIterator<Item = Product>) -> Self {
            let map = products.into_iter().map(|p| (p.code.clone(), p)).collect();
            MemoryRepository {
                products: Mutex::new(map),
            }
        }

        fn stock_of(&self, code: &str) -> Option<i64> {
            self.products.lock().unwrap().get(code).map(|p| p.stock)
        }
    }

    #[async_trait]
    impl ProductRepository for MemoryRepository {
        async fn find_by_code(&self, code: &str) -> Option<Product> {
            self.products.lock().unwrap().get(code).cloned()
        }

        async fn save(&self, product: &Product) -> bool {
            self.products
                .lock()
                .unwrap()
                .insert(product.code.clone(), product.clone());
            true
        }

        async fn delete(&self, code: &str) -> bool {
            self.products.lock().unwrap().remove(code).is_some()
        }

        async fn update_stock(&self, code: &str, new_stock: i64) -> bool {
            match self.products.lock().unwrap().get_mut(code) {
                Some(product) => {
                    product.stock = new_stock;
                    true
                }
                None => false,
            }
        }

        async fn find_all(&self) -> Vec<Product> {
            self.products.lock().unwrap().values().cloned().collect()
        }

        async fn find_by_name_prefix(&self, prefix: &str) -> Vec<Product> {
            self.products
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.name.starts_with(prefix))
                .cloned()
                .collect()
        }

        async fn find_by_category(&self, category: &str) -> Vec<Product> {
            self.products
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.category == category)
                .cloned()
                .collect()
        }

        async fn find_low_stock(&self) -> Vec<Product> {
            self.products
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.is_stock_low())
                .cloned()
                .collect()
        }

        async fn find_out_of_stock(&self) -> Vec<Product> {
            self.products
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.is_out_of_stock())
                .cloned()
                .collect()
        }
    }

    fn laptop() -> Product {
        Product::new("PRD001", "Gaming Laptop", "Electronics", 1500.0, 10, 5)
    }

    fn dormant_keyboard() -> Product {
        Product::new("PRD002", "Old Keyboard", "Electronics", 30.0, 3, 1).with_active(false)
    }

    fn service(
        repo: MemoryRepository,
    ) -> InventoryService<MemoryRepository, StandardValidator> {
        InventoryService::new(repo, StandardValidator)
    }

    // -------------------------------------------------------------------------
    // add_product
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn add_product_persists_valid_new_record() {
        let svc = service(MemoryRepository::default());
        assert!(svc.add_product(&laptop()).await);
        assert!(svc.find_by_code("PRD001").await.is_some());
    }

    #[tokio::test]
    async fn add_product_rejects_duplicate_code() {
        let svc = service(MemoryRepository::with([laptop()]));
        let duplicate = Product::new("PRD001", "Another Laptop", "Electronics", 900.0, 1, 1);
        assert!(!svc.add_product(&duplicate).await);
        // original untouched
        assert_eq!(svc.find_by_code("PRD001").await.unwrap().name, "Gaming Laptop");
    }

    #[tokio::test]
    async fn add_product_rejects_invalid_fields() {
        let svc = service(MemoryRepository::default());
        let free = Product::new("PRD003", "Freebie", "Misc", 0.0, 1, 1);
        assert!(!svc.add_product(&free).await);
        assert!(svc.all_products().await.is_empty());
    }

    // -------------------------------------------------------------------------
    // remove_product
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn remove_product_requires_depleted_stock() {
        let mut depleted = laptop();
        depleted.stock = 0;
        let svc = service(MemoryRepository::with([depleted]));
        assert!(svc.remove_product("PRD001").await);
        assert!(svc.find_by_code("PRD001").await.is_none());
    }

    #[tokio::test]
    async fn remove_product_fails_with_stock_on_hand() {
        let svc = service(MemoryRepository::with([laptop()]));
        assert!(!svc.remove_product("PRD001").await);
        assert!(svc.find_by_code("PRD001").await.is_some());
    }

    #[tokio::test]
    async fn remove_product_fails_on_bad_code_or_absence() {
        let svc = service(MemoryRepository::default());
        assert!(!svc.remove_product("").await);
        assert!(!svc.remove_product("PRD-01!").await);
        assert!(!svc.remove_product("PRD999").await);
    }

    // -------------------------------------------------------------------------
    // stock_out / stock_in
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn stock_out_books_against_current_level() {
        let repo = MemoryRepository::with([laptop()]);
        let svc = service(repo);
        assert!(svc.stock_out("PRD001", 4).await);
        assert_eq!(svc.repository.stock_of("PRD001"), Some(6));
    }

    #[tokio::test]
    async fn stock_out_rejects_non_positive_quantity() {
        let svc = service(MemoryRepository::with([laptop()]));
        assert!(!svc.stock_out("PRD001", 0).await);
        assert!(!svc.stock_out("PRD001", -5).await);
        assert_eq!(svc.repository.stock_of("PRD001"), Some(10));
    }

    #[tokio::test]
    async fn stock_out_rejects_missing_or_inactive_product() {
        let svc = service(MemoryRepository::with([dormant_keyboard()]));
        assert!(!svc.stock_out("PRD999", 5).await);
        // inactive blocks regardless of requested quantity
        assert!(!svc.stock_out("PRD002", 1).await);
        assert!(!svc.stock_out("PRD002", 100).await);
        assert_eq!(svc.repository.stock_of("PRD002"), Some(3));
    }

    #[tokio::test]
    async fn stock_out_rejects_overdraw_and_leaves_stock_unchanged() {
        let svc = service(MemoryRepository::with([laptop()]));
        assert!(!svc.stock_out("PRD001", 15).await);
        assert_eq!(svc.repository.stock_of("PRD001"), Some(10));
        // boundary: exactly the available amount succeeds
        assert!(svc.stock_out("PRD001", 10).await);
        assert_eq!(svc.repository.stock_of("PRD001"), Some(0));
    }

    #[tokio::test]
    async fn stock_in_adds_without_upper_bound() {
        let svc = service(MemoryRepository::with([laptop()]));
        assert!(svc.stock_in("PRD001", 1_000_000).await);
        assert_eq!(svc.repository.stock_of("PRD001"), Some(1_000_010));
    }

    #[tokio::test]
    async fn stock_in_gates_match_stock_out() {
        let svc = service(MemoryRepository::with([dormant_keyboard()]));
        assert!(!svc.stock_in("PRD002", 5).await);
        assert!(!svc.stock_in("PRD002", 0).await);
        assert!(!svc.stock_in("PRD999", 5).await);
    }

    // -------------------------------------------------------------------------
    // update_stock (absolute)
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn update_stock_sets_absolute_level() {
        let svc = service(MemoryRepository::with([laptop()]));
        assert!(svc.update_stock("PRD001", 42).await);
        assert_eq!(svc.repository.stock_of("PRD001"), Some(42));
    }

    #[tokio::test]
    async fn update_stock_gates() {
        let svc = service(MemoryRepository::with([laptop()]));
        assert!(!svc.update_stock("bad code!", 20).await);
        assert!(!svc.update_stock("PRD001", -5).await);
        assert!(!svc.update_stock("PRD999", 20).await);
        assert_eq!(svc.repository.stock_of("PRD001"), Some(10));
    }

    // -------------------------------------------------------------------------
    // Queries and totals
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn find_by_code_returns_none_for_malformed_code() {
        let svc = service(MemoryRepository::with([laptop()]));
        assert!(svc.find_by_code("PRD001").await.is_some());
        assert!(svc.find_by_code("??").await.is_none());
        assert!(svc.find_by_code("PRD999").await.is_none());
    }

    #[tokio::test]
    async fn name_and_category_queries_pass_through() {
        let svc = service(MemoryRepository::with([laptop(), dormant_keyboard()]));
        let by_name = svc.find_by_name_prefix("Gaming").await;
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].code, "PRD001");

        // no validation gate: inactive products come back too
        let by_category = svc.find_by_category("Electronics").await;
        assert_eq!(by_category.len(), 2);
    }

    #[tokio::test]
    async fn totals_exclude_inactive_entirely() {
        let p1 = Product::new("PRD010", "Widget A", "Misc", 100.0, 2, 1);
        let p2 = Product::new("PRD011", "Widget B", "Misc", 50.0, 5, 1);
        let p3 = Product::new("PRD012", "Widget C", "Misc", 1000.0, 100, 1).with_active(false);
        let svc = service(MemoryRepository::with([p1, p2, p3]));

        assert_eq!(svc.total_stock_on_hand().await, 7);
        let value = svc.total_inventory_value().await;
        assert!((value - 450.0).abs() < 1e-9, "got {value}");
    }

    #[tokio::test]
    async fn low_and_out_of_stock_pass_through() {
        let low = Product::new("PRD020", "Mouse", "Electronics", 25.0, 3, 5);
        let out = Product::new("PRD021", "Printer", "Electronics", 200.0, 0, 1);
        let svc = service(MemoryRepository::with([laptop(), low, out]));

        let lows = svc.low_stock_products().await;
        assert_eq!(lows.len(), 1);
        assert_eq!(lows[0].code, "PRD020");

        let outs = svc.out_of_stock_products().await;
        assert_eq!(outs.len(), 1);
        assert_eq!(outs[0].code, "PRD021");
    }

    #[tokio::test]
    async fn active_products_filters_client_side() {
        let svc = service(MemoryRepository::with([laptop(), dormant_keyboard()]));
        assert_eq!(svc.all_products().await.len(), 2);

        let active = svc.active_products().await;
        assert_eq!(active.len(), 1);
        assert!(active[0].is_active);
        assert_eq!(active[0].code, "PRD001");
    }
}
