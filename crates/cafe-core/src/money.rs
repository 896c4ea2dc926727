//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Fixed-Point Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    2.80 + 3.20 + 0.10 = 6.1000000000000005  ❌ WRONG!                   │
//! │                                                                         │
//! │  Tax on odd amounts produces fractions of a penny:                      │
//! │    £2.85 × 10% = £0.285  → rounding it early loses information         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer sub-units                                        │
//! │    1 penny = 10 000 units                                               │
//! │    A basis-point rate applied to whole pence is always exact           │
//! │    Rounding to pence happens ONLY when the value is displayed          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cafe_core::money::Money;
//!
//! let price = Money::from_pence(280); // £2.80
//! let total = price + Money::from_pence(320);
//! assert_eq!(total, Money::from_pence(600));
//! assert_eq!(total.to_string(), "£6.00");
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::TaxRate;

/// Number of internal units in one penny.
pub const UNITS_PER_PENNY: i64 = 10_000;

/// Basis points in 100%.
const BPS_SCALE: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in pounds sterling, stored as a signed count of
/// 1/10 000 penny units.
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values exist only transiently (e.g. a bad
///   tax base that must be rejected), never as prices
/// - **Sub-penny precision**: tax on a whole-pence amount is exact
/// - **Copy**: zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──► Order.subtotal ──► TaxCalculator ──► Receipt.total
///                                                              │
///                                         Displayed as "£6.60" ◄┘
/// ```
///
/// ## Serialized Form
/// A decimal pounds string rounded to pence, `"6.60"`, the same figure the
/// printed receipt shows. The internal unit count never leaves the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::money::Money;
    ///
    /// let price = Money::from_pence(320); // £3.20
    /// assert_eq!(price.rounded_pence(), 320);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence * UNITS_PER_PENNY)
    }

    /// Creates a Money value from pence, or `None` if it does not fit.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::money::Money;
    ///
    /// assert_eq!(Money::checked_from_pence(280), Some(Money::from_pence(280)));
    /// assert_eq!(Money::checked_from_pence(1_000_000_000_000_000), None);
    /// ```
    #[inline]
    pub const fn checked_from_pence(pence: i64) -> Option<Self> {
        match pence.checked_mul(UNITS_PER_PENNY) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }

    /// Creates a Money value from whole pounds.
    #[inline]
    pub const fn from_pounds(pounds: i64) -> Self {
        Money::from_pence(pounds * 100)
    }

    /// Creates a Money value from pounds and pence.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(2, 80), Money::from_pence(280));
    /// assert_eq!(Money::from_major_minor(-5, 50), Money::from_pence(-550));
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money::from_pence(major * 100 - minor)
        } else {
            Money::from_pence(major * 100 + minor)
        }
    }

    /// Creates a Money value directly from internal units.
    #[inline]
    pub const fn from_raw(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in internal units (1/10 000 penny).
    #[inline]
    pub const fn raw(&self) -> i64 {
        self.0
    }

    /// Returns the value rounded to whole pence, half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::money::Money;
    ///
    /// assert_eq!(Money::from_raw(285_000).rounded_pence(), 29); // 28.5p
    /// assert_eq!(Money::from_raw(-285_000).rounded_pence(), -29);
    /// assert_eq!(Money::from_raw(284_999).rounded_pence(), 28);
    /// ```
    pub const fn rounded_pence(&self) -> i64 {
        let whole = self.0 / UNITS_PER_PENNY;
        let rem = self.0 % UNITS_PER_PENNY;
        if rem.abs() * 2 >= UNITS_PER_PENNY {
            whole + self.0.signum()
        } else {
            whole
        }
    }

    /// Returns the whole-pounds portion of the rounded value.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.rounded_pence() / 100
    }

    /// Returns the pence portion of the rounded value (always 0-99).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.rounded_pence() % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Pounds and pence as a plain decimal string: `"6.60"`, `"-0.05"`.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.rounded_pence() < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.pounds().abs(), self.pence_part())
    }

    /// Parses a decimal pounds string with at most two decimal places.
    fn parse_decimal(input: &str) -> Option<Self> {
        let (negative, digits) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        let (pounds, pence) = match digits.split_once('.') {
            Some((_, "")) => return None,
            Some((pounds, pence)) => (pounds, pence),
            None => (digits, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if pounds.is_empty() || !all_digits(pounds) || pence.len() > 2 || !all_digits(pence) {
            return None;
        }

        let pounds: i64 = pounds.parse().ok()?;
        let pence: i64 = match pence.len() {
            0 => 0,
            // "6.6" is 6.60
            1 => pence.parse::<i64>().ok()? * 10,
            _ => pence.parse().ok()?,
        };

        let total = pounds.checked_mul(100)?.checked_add(pence)?;
        Money::checked_from_pence(if negative { -total } else { total })
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies this amount by a basis-point rate.
    ///
    /// ## Precision
    /// `units × bps / 10 000` is exact whenever the amount is a whole number
    /// of pence. Any remainder below one unit rounds half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::money::Money;
    /// use cafe_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_pence(285); // £2.85
    /// let tax = subtotal.apply_rate(TaxRate::from_bps(1000));
    /// // 28.5p is kept exactly; it only rounds to 29p on display
    /// assert_eq!(tax.raw(), 285_000);
    /// assert_eq!(tax.to_string(), "£0.29");
    /// ```
    pub fn apply_rate(&self, rate: TaxRate) -> Money {
        // i128 so large amounts cannot overflow mid-multiplication
        let product = self.0 as i128 * rate.bps() as i128;
        let whole = product / BPS_SCALE;
        let rem = product % BPS_SCALE;
        let rounded = if rem.abs() * 2 >= BPS_SCALE {
            whole + product.signum()
        } else {
            whole
        };
        Money(rounded as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the counter prints it: `£2.80`, `-£5.50`.
///
/// This is the only place where the value is rounded to pence.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pence = self.rounded_pence();
        let sign = if pence < 0 { "-" } else { "" };
        write!(f, "{}£{}.{:02}", sign, self.pounds().abs(), self.pence_part())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal pounds string such as \"6.60\"")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Money, E> {
        Money::parse_decimal(value)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(DecimalVisitor)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a unit count.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
