//! # Validation Module
//!
//! Field validation for Atlas Inventory.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: FieldValidator (THIS MODULE)                              │
//! │  ├── Pure boolean predicates over primitive values                  │
//! │  └── Injected into the service, never called as ambient globals     │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Entity invariants (types.rs)                              │
//! │  └── Stock arithmetic, activation gating                            │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  └── NOT NULL, PRIMARY KEY, CHECK constraints                       │
//! │                                                                     │
//! │  Defense in depth: each layer catches a different class of error    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The validator is a capability trait so tests can substitute a permissive
//! or rejecting stand-in and exercise the service's gating paths directly.
//! Predicates never fail and have no side effects.

use crate::types::{Category, Product};
use crate::{CODE_MAX_LEN, CODE_MIN_LEN, DESCRIPTION_MAX_LEN, NAME_MAX_LEN, NAME_MIN_LEN};

// =============================================================================
// Capability Trait
// =============================================================================

/// Pure predicate checks over primitive fields.
pub trait FieldValidator {
    /// Alphanumeric business code, 3-10 characters after trimming.
    fn is_valid_code(&self, code: &str) -> bool;

    /// Display name, 3-100 characters after trimming.
    fn is_valid_name(&self, name: &str) -> bool;

    /// Unit price: strictly positive.
    fn is_valid_price(&self, price: f64) -> bool;

    /// Stock level: non-negative.
    fn is_valid_stock(&self, stock: i64) -> bool;

    /// Minimum stock threshold: non-negative.
    fn is_valid_min_stock(&self, min_stock: i64) -> bool;

    /// Mutation quantity: strictly positive.
    fn is_valid_quantity(&self, quantity: i64) -> bool;

    /// Percentage in the inclusive 0-100 range.
    fn is_valid_percentage(&self, percentage: f64) -> bool;

    /// Composite check over every product field.
    fn is_valid_product(&self, product: &Product) -> bool {
        self.is_valid_code(&product.code)
            && self.is_valid_name(&product.name)
            && self.is_valid_name(&product.category)
            && self.is_valid_price(product.price)
            && self.is_valid_stock(product.stock)
            && self.is_valid_min_stock(product.min_stock)
    }

    /// Composite check over every category field.
    fn is_valid_category(&self, category: &Category) -> bool {
        self.is_valid_code(&category.code)
            && self.is_valid_name(&category.name)
            && category
                .description
                .as_ref()
                .map(|d| d.len() <= DESCRIPTION_MAX_LEN)
                .unwrap_or(true)
    }
}

// =============================================================================
// Standard Rules
// =============================================================================

/// The production rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardValidator;

impl FieldValidator for StandardValidator {
    fn is_valid_code(&self, code: &str) -> bool {
        let code = code.trim();
        (CODE_MIN_LEN..=CODE_MAX_LEN).contains(&code.len())
            && code.chars().all(|c| c.is_ascii_alphanumeric())
    }

    fn is_valid_name(&self, name: &str) -> bool {
        let name = name.trim();
        (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&name.len())
    }

    fn is_valid_price(&self, price: f64) -> bool {
        price > 0.0
    }

    fn is_valid_stock(&self, stock: i64) -> bool {
        stock >= 0
    }

    fn is_valid_min_stock(&self, min_stock: i64) -> bool {
        min_stock >= 0
    }

    fn is_valid_quantity(&self, quantity: i64) -> bool {
        quantity > 0
    }

    fn is_valid_percentage(&self, percentage: f64) -> bool {
        (0.0..=100.0).contains(&percentage)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Product};

    const V: StandardValidator = StandardValidator;

    #[test]
    fn test_code_rules() {
        assert!(V.is_valid_code("PRD001"));
        assert!(V.is_valid_code("abc"));
        assert!(V.is_valid_code("  PRD001  ")); // trimmed before checking

        assert!(!V.is_valid_code(""));
        assert!(!V.is_valid_code("   "));
        assert!(!V.is_valid_code("AB")); // too short
        assert!(!V.is_valid_code("ABCDEFGHIJK")); // too long
        assert!(!V.is_valid_code("PRD-001")); // hyphen not allowed
        assert!(!V.is_valid_code("PRD 01")); // space not allowed
    }

    #[test]
    fn test_name_rules() {
        assert!(V.is_valid_name("Gaming Laptop 15"));
        assert!(V.is_valid_name("abc"));
        assert!(!V.is_valid_name("ab"));
        assert!(!V.is_valid_name(""));
        assert!(!V.is_valid_name(&"x".repeat(101)));
        assert!(V.is_valid_name(&"x".repeat(100)));
    }

    #[test]
    fn test_numeric_rules() {
        assert!(V.is_valid_price(0.01));
        assert!(!V.is_valid_price(0.0));
        assert!(!V.is_valid_price(-1.0));

        assert!(V.is_valid_stock(0));
        assert!(!V.is_valid_stock(-1));
        assert!(V.is_valid_min_stock(0));
        assert!(!V.is_valid_min_stock(-5));

        assert!(V.is_valid_quantity(1));
        assert!(!V.is_valid_quantity(0));
        assert!(!V.is_valid_quantity(-3));
    }

    #[test]
    fn test_percentage_rules() {
        assert!(V.is_valid_percentage(0.0));
        assert!(V.is_valid_percentage(30.0));
        assert!(V.is_valid_percentage(100.0));
        assert!(!V.is_valid_percentage(-0.1));
        assert!(!V.is_valid_percentage(100.1));
    }

    #[test]
    fn test_composite_product_check() {
        let good = Product::new("PRD001", "Gaming Laptop", "Electronics", 1500.0, 10, 5);
        assert!(V.is_valid_product(&good));

        let bad_price = Product::new("PRD002", "Mouse", "Electronics", 0.0, 10, 5);
        assert!(!V.is_valid_product(&bad_price));

        let bad_code = Product::new("P!", "Mouse", "Electronics", 10.0, 10, 5);
        assert!(!V.is_valid_product(&bad_code));

        let bad_stock = Product::new("PRD003", "Mouse", "Electronics", 10.0, -1, 5);
        assert!(!V.is_valid_product(&bad_stock));
    }

    #[test]
    fn test_composite_category_check() {
        let good = Category::new("ELEC", "Electronics", Some("Devices".to_string()));
        assert!(V.is_valid_category(&good));

        let no_description = Category::new("ELEC", "Electronics", None);
        assert!(V.is_valid_category(&no_description));

        let long = Category::new("ELEC", "Electronics", Some("x".repeat(501)));
        assert!(!V.is_valid_category(&long));
    }
}
