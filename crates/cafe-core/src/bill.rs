//! # Bill Generation
//!
//! Turns a finished order into an immutable [`Receipt`].
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order [Americano £2.80, Latte £3.20]                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  subtotal = order.calculate_subtotal()          £6.00                  │
//! │  tax      = tax_calculator.calculate_tax(sub)   £0.60                  │
//! │  total    = subtotal + tax                      £6.60                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Receipt { lines: [(Americano, £2.80), (Latte, £3.20)], ... }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One bill per order: the caller discards the order after billing it.
//! Nothing here enforces that.

use serde::Serialize;

use crate::error::CoreResult;
use crate::item::Priced;
use crate::money::Money;
use crate::order::Order;
use crate::tax::TaxCalculator;
use crate::types::TaxRate;

/// One receipt line: a single unit of a menu item.
///
/// Uses the snapshot pattern: name and price are copied out of the order so
/// the receipt stands on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub name: String,
    pub price: Money,
}

/// The computed bill for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    lines: Vec<LineItem>,
    subtotal: Money,
    tax_rate: TaxRate,
    tax: Money,
    total: Money,
}

impl Receipt {
    /// Line items in the order they were added; duplicates are not merged.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// The rate the tax was computed at.
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn tax(&self) -> Money {
        self.tax
    }

    pub fn total(&self) -> Money {
        self.total
    }
}

/// Builds receipts.
pub struct BillGenerator;

impl BillGenerator {
    /// Computes the receipt for `order` at the calculator's rate.
    ///
    /// Fails only if the subtotal is negative, which valid menu items
    /// cannot produce.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::bill::BillGenerator;
    /// use cafe_core::item::ItemFactory;
    /// use cafe_core::money::Money;
    /// use cafe_core::order::Order;
    /// use cafe_core::tax::TaxCalculator;
    /// use std::sync::Arc;
    ///
    /// let mut order = Order::new();
    /// order.add_item(Arc::new(ItemFactory::create_from_tag("drink", "Americano", Money::from_pence(280), "Regular").unwrap()));
    /// order.add_item(Arc::new(ItemFactory::create_from_tag("drink", "Latte", Money::from_pence(320), "Large").unwrap()));
    ///
    /// let receipt = BillGenerator::generate(&order, &TaxCalculator::default()).unwrap();
    /// assert_eq!(receipt.total().to_string(), "£6.60");
    /// ```
    pub fn generate(order: &Order, tax_calculator: &TaxCalculator) -> CoreResult<Receipt> {
        let subtotal = order.calculate_subtotal();
        let tax = tax_calculator.calculate_tax(subtotal)?;
        let total = subtotal + tax;

        let lines = order
            .items()
            .iter()
            .map(|item| LineItem {
                name: item.name().to_string(),
                price: item.price(),
            })
            .collect();

        Ok(Receipt {
            lines,
            subtotal,
            tax_rate: tax_calculator.rate(),
            tax,
            total,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemFactory, MenuItem};
    use crate::types::ItemKind;
    use std::sync::Arc;

    fn item(kind: ItemKind, name: &str, pence: i64) -> Arc<MenuItem> {
        Arc::new(ItemFactory::create(kind, name, Money::from_pence(pence), "").unwrap())
    }

    #[test]
    fn test_generate_totals() {
        let mut order = Order::new();
        order.add_item(item(ItemKind::Drink, "Americano", 280));
        order.add_item(item(ItemKind::Drink, "Latte", 320));

        let receipt = BillGenerator::generate(&order, &TaxCalculator::default()).unwrap();

        assert_eq!(receipt.subtotal(), Money::from_pence(600));
        assert_eq!(receipt.tax(), Money::from_pence(60));
        assert_eq!(receipt.total(), Money::from_pence(660));
        assert_eq!(receipt.tax_rate(), TaxRate::from_bps(1000));
    }

    #[test]
    fn test_lines_keep_order_and_duplicates() {
        let croissant = item(ItemKind::Food, "Butter Croissant", 210);
        let mut order = Order::new();
        order.add_item(croissant.clone());
        order.add_item(item(ItemKind::Drink, "Latte", 320));
        order.add_item(croissant);

        let receipt = BillGenerator::generate(&order, &TaxCalculator::default()).unwrap();
        let names: Vec<&str> = receipt.lines().iter().map(|l| l.name.as_str()).collect();

        assert_eq!(names, vec!["Butter Croissant", "Latte", "Butter Croissant"]);
        assert_eq!(receipt.lines()[2].price, Money::from_pence(210));
    }

    #[test]
    fn test_empty_order_bills_to_zero() {
        let receipt = BillGenerator::generate(&Order::new(), &TaxCalculator::default()).unwrap();
        assert!(receipt.lines().is_empty());
        assert_eq!(receipt.total(), Money::zero());
    }

    #[test]
    fn test_generate_does_not_mutate_order() {
        let mut order = Order::new();
        order.add_item(item(ItemKind::Drink, "Tea", 200));

        let first = BillGenerator::generate(&order, &TaxCalculator::default()).unwrap();
        let second = BillGenerator::generate(&order, &TaxCalculator::default()).unwrap();

        assert_eq!(first, second);
        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_total_keeps_sub_penny_tax_until_display() {
        let mut order = Order::new();
        order.add_item(item(ItemKind::Food, "Flapjack", 285));

        let receipt = BillGenerator::generate(&order, &TaxCalculator::default()).unwrap();

        // 28.5p tax; £3.135 total rounds to £3.14 only when printed
        assert_eq!(receipt.tax().raw(), 285_000);
        assert_eq!(receipt.total().raw(), 3_135_000);
        assert_eq!(receipt.total().to_string(), "£3.14");
    }
}
