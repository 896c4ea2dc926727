//! # Domain Types
//!
//! Small value types shared across the counter.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    TaxRate      │   │    ItemKind     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  bps (u32)      │   │  Food           │                             │
//! │  │  1000 = 10%     │   │  Drink          │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (the counter's default rate)
///
/// Serializes as its percentage label (`"10%"`, `"8.25%"`) so a JSON
/// receipt never shows a bare basis-point count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRate(u32);

impl TaxRate {
    /// The rate a counter uses unless configured otherwise (10%).
    pub const DEFAULT: TaxRate = TaxRate(1000);

    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage, rounded to the nearest basis
    /// point. Use [`TaxRate::is_exact_percentage`] to detect lost precision.
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// True if this rate is `pct` exactly, with nothing lost to rounding.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::types::TaxRate;
    ///
    /// assert!(TaxRate::from_percentage(12.5).is_exact_percentage(12.5));
    /// assert!(!TaxRate::from_percentage(0.004).is_exact_percentage(0.004));
    /// ```
    pub fn is_exact_percentage(&self, pct: f64) -> bool {
        (self.percentage() - pct).abs() < 1e-9
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Serialize for TaxRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::DEFAULT
    }
}

/// Prints the rate as a percentage without trailing zeros: `10%`, `8.25%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}%", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}%", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}%", whole, frac)
        }
    }
}

// =============================================================================
// Item Kind
// =============================================================================

/// The closed set of menu item variants.
///
/// Parsing a kind tag is the only place an unknown tag can enter the
/// system; it fails with [`CoreError::InvalidItemType`]. Tags match exactly:
/// `"Drink"` and `" drink "` are unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Something to eat; carries a category ("Pastry", "Bakery").
    Food,
    /// Something to drink; carries a size ("Regular", "Large").
    Drink,
}

impl ItemKind {
    /// Lower-case tag used in configuration and on the wire.
    pub const fn tag(&self) -> &'static str {
        match self {
            ItemKind::Food => "food",
            ItemKind::Drink => "drink",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ItemKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food" => Ok(ItemKind::Food),
            "drink" => Ok(ItemKind::Drink),
            _ => Err(CoreError::InvalidItemType {
                tag: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(825);
        assert_eq!(rate.bps(), 825);
        assert!((rate.percentage() - 8.25).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        assert_eq!(TaxRate::from_percentage(8.25).bps(), 825);
        assert_eq!(TaxRate::from_percentage(10.0), TaxRate::DEFAULT);
    }

    #[test]
    fn test_tax_rate_default_is_ten_percent() {
        assert_eq!(TaxRate::default().bps(), 1000);
    }

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_bps(1000).to_string(), "10%");
        assert_eq!(TaxRate::from_bps(825).to_string(), "8.25%");
        assert_eq!(TaxRate::from_bps(1250).to_string(), "12.5%");
        assert_eq!(TaxRate::from_bps(5).to_string(), "0.05%");
        assert_eq!(TaxRate::zero().to_string(), "0%");
    }

    #[test]
    fn test_tax_rate_precision_check() {
        assert!(TaxRate::from_percentage(10.0).is_exact_percentage(10.0));
        assert!(TaxRate::from_percentage(8.25).is_exact_percentage(8.25));

        let rounded = TaxRate::from_percentage(0.004);
        assert_eq!(rounded.bps(), 0);
        assert!(!rounded.is_exact_percentage(0.004));
    }

    #[test]
    fn test_tax_rate_serializes_as_label() {
        assert_eq!(serde_json::to_string(&TaxRate::from_bps(825)).unwrap(), "\"8.25%\"");
        assert_eq!(serde_json::to_string(&TaxRate::DEFAULT).unwrap(), "\"10%\"");
    }

    #[test]
    fn test_item_kind_parsing() {
        assert_eq!("food".parse::<ItemKind>().unwrap(), ItemKind::Food);
        assert_eq!("drink".parse::<ItemKind>().unwrap(), ItemKind::Drink);

        for tag in ["Drink", " drink ", "FOOD", ""] {
            assert!(
                matches!(tag.parse::<ItemKind>(), Err(CoreError::InvalidItemType { .. })),
                "{:?} should be rejected",
                tag
            );
        }

        let err = "dessert".parse::<ItemKind>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidItemType { ref tag } if tag == "dessert"));
    }

    #[test]
    fn test_item_kind_tag_round_trip() {
        for kind in [ItemKind::Food, ItemKind::Drink] {
            assert_eq!(kind.tag().parse::<ItemKind>().unwrap(), kind);
        }
    }
}
