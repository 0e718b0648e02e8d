//! # Error Types
//!
//! Domain-specific error types for atlas-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  atlas-core errors (this file)                                      │
//! │  └── CoreError                                                      │
//! │      ├── InvalidArgument - a precondition on an input was violated  │
//! │      └── InvalidState    - operation not allowed for the product's  │
//! │                            current state (inactive, depleted, ...)  │
//! │                                                                     │
//! │  atlas-db errors (separate crate)                                   │
//! │  └── DbError             - database operation failures              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Who Raises, Who Returns
//! The discount engine and the `Product` entity raise `CoreError` when a
//! precondition is violated: a caller passing a non-positive price is a
//! programming error worth surfacing loudly.
//!
//! The inventory service never raises. Business-rule rejections (duplicate
//! code, inactive product, insufficient stock) come back as `false` or an
//! empty `Option` so callers handle them as ordinary outcomes.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Exactly two kinds exist: a bad input value, or an operation attempted
/// against a product whose state forbids it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    /// A precondition on an input value was violated.
    ///
    /// ## When This Occurs
    /// - Non-positive price or quantity passed to the discount engine
    /// - Negative quantity passed to a stock mutation
    /// - Requested quantity exceeds available stock
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// The operation is not allowed in the product's current state.
    ///
    /// ## When This Occurs
    /// - Stock mutation or pricing attempted on an inactive product
    #[error("invalid state for product {code}: {reason}")]
    InvalidState { code: String, reason: String },
}

impl CoreError {
    /// Creates an InvalidArgument error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        CoreError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates an InvalidState error for a given product code.
    pub fn invalid_state(code: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidState {
            code: code.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = CoreError::invalid_argument("price and quantity must be positive");
        assert_eq!(
            err.to_string(),
            "invalid argument: price and quantity must be positive"
        );
    }

    #[test]
    fn test_invalid_state_message() {
        let err = CoreError::invalid_state("PRD001", "product is inactive");
        assert_eq!(
            err.to_string(),
            "invalid state for product PRD001: product is inactive"
        );
    }
}
