//! # Discount Engine
//!
//! Tiered sales discounts for Atlas Inventory.
//!
//! ## How A Discount Is Built
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Combined Discount Rate                          │
//! │                                                                     │
//! │  Quantity tier (inclusive lower bounds)                             │
//! │  ├── qty >= 100  → 20%                                              │
//! │  ├── qty >=  50  → 15%                                              │
//! │  ├── qty >=  10  → 10%                                              │
//! │  ├── qty >=   5  →  5%                                              │
//! │  └── otherwise   →  0%                                              │
//! │          +                                                          │
//! │  Customer class tier (case-insensitive)                             │
//! │  ├── PREMIUM     → 10%                                              │
//! │  ├── REGULAR     →  5%                                              │
//! │  ├── NEW         →  2%                                              │
//! │  └── anything else → 0% (silently - unknown classes are not errors) │
//! │          =                                                          │
//! │  Combined rate, capped at 30%                                       │
//! │                                                                     │
//! │  discount = unit_price × quantity × combined_rate                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All arithmetic is plain f64 with no intermediate rounding; rounding for
//! display is the caller's concern.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Constants
// =============================================================================

/// Hard ceiling on the combined discount rate.
///
/// The cap applies to the *sum* of the quantity and class tiers, not to each
/// tier independently.
pub const MAX_COMBINED_RATE: f64 = 0.30;

/// Tolerance used when classifying a rate into a band.
///
/// A rate computed as 0.19999999 (float representation of 0.20) must still
/// classify as the higher band, so band thresholds are compared with this
/// epsilon subtracted.
pub const RATE_EPSILON: f64 = 1e-4;

// =============================================================================
// Customer Class
// =============================================================================

/// Recognized customer classes and their discount rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerClass {
    Premium,
    Regular,
    New,
}

impl CustomerClass {
    /// Parses a class label, case-insensitively.
    ///
    /// Unknown or empty labels return `None`; the engine treats those as a
    /// zero class rate rather than an error.
    pub fn parse(label: &str) -> Option<CustomerClass> {
        match label.trim().to_ascii_uppercase().as_str() {
            "PREMIUM" => Some(CustomerClass::Premium),
            "REGULAR" => Some(CustomerClass::Regular),
            "NEW" => Some(CustomerClass::New),
            _ => None,
        }
    }

    /// The discount rate awarded to this class.
    pub fn rate(&self) -> f64 {
        match self {
            CustomerClass::Premium => 0.10,
            CustomerClass::Regular => 0.05,
            CustomerClass::New => 0.02,
        }
    }
}

// =============================================================================
// Discount Band
// =============================================================================

/// Categorical label for a discount rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DiscountBand {
    #[serde(rename = "NO_DISCOUNT")]
    None,
    #[serde(rename = "LIGHT_DISCOUNT")]
    Light,
    #[serde(rename = "MEDIUM_DISCOUNT")]
    Medium,
    #[serde(rename = "LARGE_DISCOUNT")]
    Large,
}

impl fmt::Display for DiscountBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DiscountBand::None => "NO_DISCOUNT",
            DiscountBand::Light => "LIGHT_DISCOUNT",
            DiscountBand::Medium => "MEDIUM_DISCOUNT",
            DiscountBand::Large => "LARGE_DISCOUNT",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Engine Operations
// =============================================================================

/// Computes the discount amount for a line.
///
/// ## Arguments
/// * `unit_price` - Price per unit, must be positive
/// * `quantity` - Units purchased, must be positive
/// * `customer_class` - Free-form class label; unknown labels earn no rate
///
/// ## Errors
/// `InvalidArgument` when `unit_price <= 0` or `quantity <= 0`.
///
/// ## Example
/// ```rust
/// use atlas_core::discount::compute_discount;
///
/// // 100 units PREMIUM: 20% + 10% = 30% (exactly at the cap)
/// let d = compute_discount(1000.0, 100, "PREMIUM").unwrap();
/// assert!((d - 30_000.0).abs() < 1e-9);
/// ```
pub fn compute_discount(unit_price: f64, quantity: i64, customer_class: &str) -> CoreResult<f64> {
    if unit_price <= 0.0 || quantity <= 0 {
        return Err(CoreError::invalid_argument(
            "price and quantity must be positive",
        ));
    }

    let gross = unit_price * quantity as f64;
    let rate = combined_rate(quantity, customer_class);

    Ok(gross * rate)
}

/// Computes the net price for a line: gross minus discount.
///
/// Inherits the validation (and failures) of [`compute_discount`].
pub fn net_price(unit_price: f64, quantity: i64, customer_class: &str) -> CoreResult<f64> {
    let discount = compute_discount(unit_price, quantity, customer_class)?;
    Ok(unit_price * quantity as f64 - discount)
}

/// Classifies an already-capped rate into a band.
///
/// Thresholds are inclusive lower bounds with [`RATE_EPSILON`] slack so that
/// float rounding at an exact boundary never drops a rate into the band
/// below.
pub fn classify_rate(rate: f64) -> DiscountBand {
    if rate >= 0.20 - RATE_EPSILON {
        DiscountBand::Large
    } else if rate >= 0.10 - RATE_EPSILON {
        DiscountBand::Medium
    } else if rate >= 0.05 - RATE_EPSILON {
        DiscountBand::Light
    } else {
        DiscountBand::None
    }
}

/// Combined quantity + class rate, capped at [`MAX_COMBINED_RATE`].
pub fn combined_rate(quantity: i64, customer_class: &str) -> f64 {
    let rate = quantity_rate(quantity) + class_rate(customer_class);
    rate.min(MAX_COMBINED_RATE)
}

/// Monotonic step function over the quantity tiers.
fn quantity_rate(quantity: i64) -> f64 {
    if quantity >= 100 {
        0.20
    } else if quantity >= 50 {
        0.15
    } else if quantity >= 10 {
        0.10
    } else if quantity >= 5 {
        0.05
    } else {
        0.00
    }
}

/// Rate for a customer class label; unknown labels earn nothing.
fn class_rate(customer_class: &str) -> f64 {
    CustomerClass::parse(customer_class)
        .map(|class| class.rate())
        .unwrap_or(0.0)
}

// =============================================================================
// Unit Tests
// =============================================================================
