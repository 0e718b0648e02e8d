//! # Product Repository
//!
//! SQLite implementation of the atlas-core `ProductRepository` contract.
//!
//! ## Contract Coercion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │             How SQL Failures Meet the Total Contract                │
//! │                                                                     │
//! │  trait method (e.g. save)                                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  internal helper → DbResult<_>                                      │
//! │       │                                                             │
//! │       ├── Ok(outcome)  → forwarded as-is                            │
//! │       │                                                             │
//! │       └── Err(db_err)  → warn!(..) then `false` / `None` / empty    │
//! │                                                                     │
//! │  The inventory service never sees a DbError; persistence            │
//! │  unavailability looks exactly like a rejected write, as the         │
//! │  contract requires.                                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::DbResult;
use atlas_core::{Product, ProductRepository};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
/// let product = repo.find_by_code("PRD001").await;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

/// Column list shared by every SELECT; keeps FromRow mapping in one place.
const PRODUCT_COLUMNS: &str =
    "code, name, category, price, stock, min_stock, is_active, created_at, updated_at";

impl SqliteProductRepository {
    /// Creates a new repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteProductRepository { pool }
    }

    // -------------------------------------------------------------------------
    // Internal helpers (DbResult-returning)
    // -------------------------------------------------------------------------

    async fn try_find_by_code(&self, code: &str) -> DbResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE code = ?1");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    /// Upsert by code: `save` must be total, so an existing row is
    /// overwritten rather than rejected.
    async fn try_save(&self, product: &Product) -> DbResult<()> {
        debug!(code = %product.code, "Saving product");

        sqlx::query(
            r#"
            INSERT INTO products (
                code, name, category, price, stock, min_stock,
                is_active, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ON CONFLICT(code) DO UPDATE SET
                name = excluded.name,
                category = excluded.category,
                price = excluded.price,
                stock = excluded.stock,
                min_stock = excluded.min_stock,
                is_active = excluded.is_active,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&product.code)
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.min_stock)
        .bind(product.is_active)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn try_delete(&self, code: &str) -> DbResult<bool> {
        debug!(code = %code, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE code = ?1")
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn try_update_stock(&self, code: &str, new_stock: i64) -> DbResult<bool> {
        debug!(code = %code, new_stock, "Updating stock");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE products
            SET stock = ?2, updated_at = ?3
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .bind(new_stock)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn try_find_all(&self) -> DbResult<Vec<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY code");
        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    async fn try_find_by_name_prefix(&self, prefix: &str) -> DbResult<Vec<Product>> {
        // Escape LIKE wildcards so a prefix of "50%" matches literally
        let escaped = prefix.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
        let pattern = format!("{escaped}%");

        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE name LIKE ?1 ESCAPE '\\' ORDER BY name"
        );
        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    async fn try_find_by_category(&self, category: &str) -> DbResult<Vec<Product>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category = ?1 ORDER BY name"
        );
        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    async fn try_find_low_stock(&self) -> DbResult<Vec<Product>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE is_active = 1 AND stock > 0 AND stock <= min_stock \
             ORDER BY stock ASC"
        );
        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    async fn try_find_out_of_stock(&self) -> DbResult<Vec<Product>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE is_active = 1 AND stock = 0 ORDER BY name"
        );
        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    /// Counts stored products (for diagnostics and the seed tool).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Contract Implementation
// =============================================================================

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn find_by_code(&self, code: &str) -> Option<Product> {
        match self.try_find_by_code(code).await {
            Ok(product) => product,
            Err(e) => {
                warn!(code = %code, error = %e, "find_by_code failed");
                None
            }
        }
    }

    async fn save(&self, product: &Product) -> bool {
        match self.try_save(product).await {
            Ok(()) => true,
            Err(e) => {
                warn!(code = %product.code, error = %e, "save failed");
                false
            }
        }
    }

    async fn delete(&self, code: &str) -> bool {
        match self.try_delete(code).await {
            Ok(deleted) => deleted,
            Err(e) => {
                warn!(code = %code, error = %e, "delete failed");
                false
            }
        }
    }

    async fn update_stock(&self, code: &str, new_stock: i64) -> bool {
        match self.try_update_stock(code, new_stock).await {
            Ok(updated) => updated,
            Err(e) => {
                warn!(code = %code, new_stock, error = %e, "update_stock failed");
                false
            }
        }
    }

    async fn find_all(&self) -> Vec<Product> {
        self.try_find_all().await.unwrap_or_else(|e| {
            warn!(error = %e, "find_all failed");
            Vec::new()
        })
    }

    async fn find_by_name_prefix(&self, prefix: &str) -> Vec<Product> {
        self.try_find_by_name_prefix(prefix).await.unwrap_or_else(|e| {
            warn!(prefix = %prefix, error = %e, "find_by_name_prefix failed");
            Vec::new()
        })
    }

    async fn find_by_category(&self, category: &str) -> Vec<Product> {
        self.try_find_by_category(category).await.unwrap_or_else(|e| {
            warn!(category = %category, error = %e, "find_by_category failed");
            Vec::new()
        })
    }

    async fn find_low_stock(&self) -> Vec<Product> {
        self.try_find_low_stock().await.unwrap_or_else(|e| {
            warn!(error = %e, "find_low_stock failed");
            Vec::new()
        })
    }

    async fn find_out_of_stock(&self) -> Vec<Product> {
        self.try_find_out_of_stock().await.unwrap_or_else(|e| {
            warn!(error = %e, "find_out_of_stock failed");
            Vec::new()
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn repo() -> SqliteProductRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
    }

    fn laptop() -> Product {
        Product::new("PRD001", "Gaming Laptop", "Electronics", 1500.0, 10, 5)
    }

    #[tokio::test]
    async fn test_save_and_find_round_trip() {
        let repo = repo().await;
        assert!(repo.save(&laptop()).await);

        let found = repo.find_by_code("PRD001").await.unwrap();
        assert_eq!(found.name, "Gaming Laptop");
        assert_eq!(found.stock, 10);
        assert!(found.is_active);

        assert!(repo.find_by_code("PRD999").await.is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_code() {
        let repo = repo().await;
        assert!(repo.save(&laptop()).await);

        let mut updated = laptop();
        updated.price = 1200.0;
        updated.stock = 4;
        assert!(repo.save(&updated).await);

        let found = repo.find_by_code("PRD001").await.unwrap();
        assert_eq!(found.stock, 4);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_stock_absolute() {
        let repo = repo().await;
        repo.save(&laptop()).await;

        assert!(repo.update_stock("PRD001", 3).await);
        assert_eq!(repo.find_by_code("PRD001").await.unwrap().stock, 3);

        // unknown code: no rows affected
        assert!(!repo.update_stock("PRD999", 3).await);
    }

    #[tokio::test]
    async fn test_update_stock_negative_rejected_by_check() {
        let repo = repo().await;
        repo.save(&laptop()).await;

        // CHECK (stock >= 0) turns this into a total `false`, not a panic
        assert!(!repo.update_stock("PRD001", -1).await);
        assert_eq!(repo.find_by_code("PRD001").await.unwrap().stock, 10);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repo().await;
        repo.save(&laptop()).await;

        assert!(repo.delete("PRD001").await);
        assert!(!repo.delete("PRD001").await);
        assert!(repo.find_by_code("PRD001").await.is_none());
    }

    #[tokio::test]
    async fn test_name_prefix_and_category_queries() {
        let repo = repo().await;
        repo.save(&laptop()).await;
        repo.save(&Product::new("PRD002", "Gaming Mouse", "Electronics", 40.0, 5, 2))
            .await;
        repo.save(&Product::new("PRD003", "Desk Chair", "Furniture", 120.0, 2, 1))
            .await;

        let gaming = repo.find_by_name_prefix("Gaming").await;
        assert_eq!(gaming.len(), 2);

        let furniture = repo.find_by_category("Furniture").await;
        assert_eq!(furniture.len(), 1);
        assert_eq!(furniture[0].code, "PRD003");

        assert_eq!(repo.find_by_name_prefix("Nothing").await.len(), 0);
    }

    #[tokio::test]
    async fn test_low_and_out_of_stock_exclude_inactive() {
        let repo = repo().await;
        repo.save(&laptop()).await; // safe
        repo.save(&Product::new("PRD010", "Mouse", "Electronics", 25.0, 3, 5))
            .await; // low
        repo.save(&Product::new("PRD011", "Printer", "Electronics", 200.0, 0, 1))
            .await; // out
        repo.save(
            &Product::new("PRD012", "Retired Cable", "Electronics", 5.0, 0, 1)
                .with_active(false),
        )
        .await; // inactive: reports nothing

        let lows = repo.find_low_stock().await;
        assert_eq!(lows.len(), 1);
        assert_eq!(lows[0].code, "PRD010");

        let outs = repo.find_out_of_stock().await;
        assert_eq!(outs.len(), 1);
        assert_eq!(outs[0].code, "PRD011");
    }

    #[tokio::test]
    async fn test_find_all_returns_inactive_too() {
        let repo = repo().await;
        repo.save(&laptop()).await;
        repo.save(&Product::new("PRD020", "Old Hub", "Electronics", 9.0, 1, 1).with_active(false))
            .await;

        assert_eq!(repo.find_all().await.len(), 2);
    }
}
