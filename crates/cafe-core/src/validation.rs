//! # Validation Module
//!
//! Input validation for menu items and counter settings.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  counter.toml ──► CounterConfig::validate()                            │
//! │                     ├── validate_tax_rate_bps                          │
//! │                     └── every [[menu]] entry ──┐                       │
//! │                                                 ▼                       │
//! │                            ItemFactory::create ← THIS MODULE            │
//! │                              ├── validate_item_name                     │
//! │                              ├── validate_price                         │
//! │                              └── validate_item_attribute                │
//! │                                                                         │
//! │  Once an item is in the catalog it is known-good for its lifetime.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted menu item name.
pub const MAX_ITEM_NAME_LEN: usize = 60;

/// Longest accepted category/size attribute.
pub const MAX_ATTRIBUTE_LEN: usize = 40;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 60 characters
///
/// ## Example
/// ```rust
/// use cafe_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Americano").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a food category or drink size.
///
/// Empty is allowed; the attribute is informational only.
pub fn validate_item_attribute(attribute: &str) -> ValidationResult<()> {
    if attribute.trim().chars().count() > MAX_ATTRIBUTE_LEN {
        return Err(ValidationError::TooLong {
            field: "attribute".to_string(),
            max: MAX_ATTRIBUTE_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a menu price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items, e.g. tap water)
///
/// ## Example
/// ```rust
/// use cafe_core::money::Money;
/// use cafe_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_pence(280)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_pence(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Butter Croissant").is_ok());
        assert!(validate_item_name("Café au lait").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(61)).is_err());
        assert!(validate_item_name(&"A".repeat(60)).is_ok());
    }

    #[test]
    fn test_validate_item_attribute() {
        assert!(validate_item_attribute("").is_ok());
        assert!(validate_item_attribute("Large").is_ok());
        assert!(validate_item_attribute(&"x".repeat(41)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_pence(1099)).is_ok());
        assert!(matches!(
            validate_price(Money::from_pence(-1)),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(1000).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }
}
