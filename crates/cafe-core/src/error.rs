//! # Error Types
//!
//! Domain-specific error types for cafe-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cafe-core errors (this file)                                          │
//! │  ├── CoreError        - Caller-usage errors (bad tag, bad index, ...)  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  counter app errors (apps/counter)                                     │
//! │  └── CounterError     - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CounterError → terminal           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Convention
//! Every failing lookup or removal returns `Err` with a named variant.
//! Nothing in the core signals failure with an absent value, and a failed
//! mutation never partially applies.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These are precondition violations by the caller. They are not retryable;
/// the front-end turns them into operator-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The item factory was handed a kind tag it does not know.
    #[error("Unsupported menu item type: '{tag}'")]
    InvalidItemType { tag: String },

    /// Tax was requested on a negative amount.
    #[error("Invalid amount for tax calculation: {amount}")]
    InvalidAmount { amount: Money },

    /// A 1-based menu position outside `1..=size`.
    ///
    /// ## When This Occurs
    /// - Position 0 (menus are numbered from 1)
    /// - Position past the last item
    /// - Any lookup on an empty menu
    #[error("Menu position {position} is out of range (menu has {size} items)")]
    PositionOutOfRange { position: usize, size: usize },

    /// A 0-based order index outside `0..len`.
    #[error("Order index {index} is out of range (order has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while building menu items and checking configuration values.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be below zero.
    #[error("{field} must not be negative")]
    Negative { field: String },
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
    fn test_error_messages() {
        let err = CoreError::InvalidItemType {
            tag: "dessert".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported menu item type: 'dessert'");

        let err = CoreError::InvalidAmount {
            amount: Money::from_pounds(-20),
        };
        assert_eq!(
            err.to_string(),
            "Invalid amount for tax calculation: -£20.00"
        );

        let err = CoreError::PositionOutOfRange {
            position: 0,
            size: 5,
        };
        assert_eq!(
            err.to_string(),
            "Menu position 0 is out of range (menu has 5 items)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
