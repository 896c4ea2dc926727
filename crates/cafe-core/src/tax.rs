//! # Tax Calculator
//!
//! Pure `amount → tax` at a rate fixed when the calculator is built.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::TaxRate;
use crate::validation::validate_tax_rate_bps;

/// Computes tax on an amount at a fixed rate.
///
/// ## Example
/// ```rust
/// use cafe_core::money::Money;
/// use cafe_core::tax::TaxCalculator;
///
/// let calc = TaxCalculator::default(); // 10%
/// assert_eq!(calc.calculate_tax(Money::from_pounds(100)).unwrap(), Money::from_pounds(10));
/// assert!(calc.calculate_tax(Money::from_pounds(-20)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaxCalculator {
    rate: TaxRate,
}

impl TaxCalculator {
    /// Creates a calculator for `rate`.
    pub const fn new(rate: TaxRate) -> Self {
        TaxCalculator { rate }
    }

    /// Creates a calculator after checking the rate is within 0-100%.
    pub fn try_from_bps(bps: u32) -> CoreResult<Self> {
        validate_tax_rate_bps(bps)?;
        Ok(TaxCalculator::new(TaxRate::from_bps(bps)))
    }

    /// The active rate.
    pub fn rate(&self) -> TaxRate {
        self.rate
    }

    /// Returns `amount × rate`.
    ///
    /// Fails with [`CoreError::InvalidAmount`] when `amount` is negative.
    pub fn calculate_tax(&self, amount: Money) -> CoreResult<Money> {
        if amount.is_negative() {
            return Err(CoreError::InvalidAmount { amount });
        }

        Ok(amount.apply_rate(self.rate))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
