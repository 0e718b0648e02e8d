//! # Domain Types
//!
//! Core domain entities used throughout Atlas Inventory.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌───────────────────┐        ┌───────────────────┐                │
//! │  │     Product       │        │     Category      │                │
//! │  │  ───────────────  │        │  ───────────────  │                │
//! │  │  code (identity)  │        │  code (identity)  │                │
//! │  │  name             │        │  name             │                │
//! │  │  category         │        │  description      │                │
//! │  │  price (f64 > 0)  │        │  is_active        │                │
//! │  │  stock (>= 0)     │        └───────────────────┘                │
//! │  │  min_stock        │                                             │
//! │  │  is_active        │   Equality and hashing for both entities    │
//! │  └───────────────────┘   derive from `code` alone.                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity By Code
//! The product code is the business key: two records with the same code are
//! the same product no matter what the other fields say. `PartialEq` and
//! `Hash` are implemented by hand to enforce this.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Product
// =============================================================================

/// A tracked inventory item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Business identifier - unique, alphanumeric.
    pub code: String,

    /// Display name.
    pub name: String,

    /// Category label this product is filed under.
    pub category: String,

    /// Unit price. Positive once validated.
    pub price: f64,

    /// Current stock level. Never negative.
    pub stock: i64,

    /// Minimum stock threshold; at or below this the product counts as low.
    pub min_stock: i64,

    /// Activation gate. While false, stock mutations and pricing are rejected.
    pub is_active: bool,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new active product.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: i64,
        min_stock: i64,
    ) -> Self {
        let now = Utc::now();
        Product {
            code: code.into(),
            name: name.into(),
            category: category.into(),
            price,
            stock,
            min_stock,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the same product with the activation flag overridden.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    // -------------------------------------------------------------------------
    // Derived stock status
    // -------------------------------------------------------------------------
    // All three are gated on `is_active`: an inactive product reports none of
    // them, it is simply out of circulation.

    /// Stock is comfortably above the minimum threshold.
    pub fn is_stock_safe(&self) -> bool {
        self.is_active && self.stock > self.min_stock
    }

    /// Stock is positive but at or below the minimum threshold.
    pub fn is_stock_low(&self) -> bool {
        self.is_active && self.stock > 0 && self.stock <= self.min_stock
    }

    /// Stock is fully depleted.
    pub fn is_out_of_stock(&self) -> bool {
        self.is_active && self.stock == 0
    }

    // -------------------------------------------------------------------------
    // Stock arithmetic
    // -------------------------------------------------------------------------

    /// Removes `quantity` units from stock.
    ///
    /// ## Errors
    /// - `InvalidState` if the product is inactive
    /// - `InvalidArgument` if `quantity` is negative
    /// - `InvalidArgument` if `quantity` exceeds current stock
    pub fn remove_stock(&mut self, quantity: i64) -> CoreResult<()> {
        self.ensure_active()?;
        if quantity < 0 {
            return Err(CoreError::invalid_argument("quantity must be positive"));
        }
        if quantity > self.stock {
            return Err(CoreError::invalid_argument(format!(
                "insufficient stock: available {}, requested {}",
                self.stock, quantity
            )));
        }
        self.stock -= quantity;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Adds `quantity` units to stock. No upper bound.
    ///
    /// ## Errors
    /// - `InvalidState` if the product is inactive
    /// - `InvalidArgument` if `quantity` is negative
    pub fn add_stock(&mut self, quantity: i64) -> CoreResult<()> {
        self.ensure_active()?;
        if quantity < 0 {
            return Err(CoreError::invalid_argument("quantity must be positive"));
        }
        self.stock += quantity;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Computes `price * quantity` for this product.
    ///
    /// ## Errors
    /// Same gating as the stock mutations: inactive products cannot be priced.
    pub fn total_price(&self, quantity: i64) -> CoreResult<f64> {
        self.ensure_active()?;
        if quantity < 0 {
            return Err(CoreError::invalid_argument("quantity must be positive"));
        }
        Ok(self.price * quantity as f64)
    }

    /// Marks the product active again.
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    /// Takes the product out of circulation.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    fn ensure_active(&self) -> CoreResult<()> {
        if !self.is_active {
            return Err(CoreError::invalid_state(&self.code, "product is inactive"));
        }
        Ok(())
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

// =============================================================================
// Category
// =============================================================================

/// A grouping label for products.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    /// Business identifier - unique, alphanumeric.
    pub code: String,

    /// Display name.
    pub name: String,

    /// Optional free-form description.
    pub description: Option<String>,

    /// Whether the category is in use.
    pub is_active: bool,
}

impl Category {
    /// Creates a new active category.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Category {
            code: code.into(),
            name: name.into(),
            description,
            is_active: true,
        }
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
