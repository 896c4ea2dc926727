//! # Receipt Rendering
//!
//! Fixed-width text rendering of a [`Receipt`].
//!
//! ## Layout
//! ```text
//! ------ CaféSmart Receipt ------      ◄── title
//! Americano              £2.80         ◄── name_width | amount_width
//! Latte                  £3.20
//! -------------------------------      ◄── rule_width
//! Subtotal:              £6.00
//! Tax (10%):             £0.60
//! Total Due:             £6.60
//! -------------------------------
//! Thank you. Please come again!        ◄── footer
//! -------------------------------
//! ```
//!
//! Item names longer than `name_width` are truncated; amounts are
//! right-aligned and rounded to pence here and nowhere earlier.

use serde::{Deserialize, Serialize};

use crate::bill::Receipt;
use crate::money::Money;

/// Column widths and fixed text for a printed receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLayout {
    /// Store name shown in the title line.
    pub title: String,
    /// Closing message.
    pub footer: String,
    /// Width of the left (name / label) column, in characters.
    pub name_width: usize,
    /// Width of the right-aligned amount column, in characters.
    pub amount_width: usize,
    /// Length of the horizontal rules.
    pub rule_width: usize,
}

impl Default for ReceiptLayout {
    fn default() -> Self {
        ReceiptLayout {
            title: "CaféSmart".to_string(),
            footer: "Thank you. Please come again!".to_string(),
            name_width: 18,
            amount_width: 10,
            rule_width: 31,
        }
    }
}

impl ReceiptLayout {
    fn row(&self, label: &str, amount: Money) -> String {
        let label: String = label.chars().take(self.name_width).collect();
        format!(
            "{:<nw$}{:>aw$}",
            label,
            amount.to_string(),
            nw = self.name_width,
            aw = self.amount_width
        )
    }

    fn rule(&self) -> String {
        "-".repeat(self.rule_width)
    }
}

/// Renders `receipt` as newline-separated text (no trailing newline).
///
/// ## Example
/// ```rust
/// use cafe_core::bill::BillGenerator;
/// use cafe_core::order::Order;
/// use cafe_core::receipt::{render_receipt, ReceiptLayout};
/// use cafe_core::tax::TaxCalculator;
///
/// let receipt = BillGenerator::generate(&Order::new(), &TaxCalculator::default()).unwrap();
/// let text = render_receipt(&receipt, &ReceiptLayout::default());
/// assert!(text.starts_with("------ CaféSmart Receipt ------"));
/// assert!(text.contains("Total Due:"));
/// ```
pub fn render_receipt(receipt: &Receipt, layout: &ReceiptLayout) -> String {
    let mut out = Vec::with_capacity(receipt.lines().len() + 9);

    out.push(format!("------ {} Receipt ------", layout.title));
    for line in receipt.lines() {
        out.push(layout.row(&line.name, line.price));
    }
    out.push(layout.rule());
    out.push(layout.row("Subtotal:", receipt.subtotal()));
    out.push(layout.row(&format!("Tax ({}):", receipt.tax_rate()), receipt.tax()));
    out.push(layout.row("Total Due:", receipt.total()));
    out.push(layout.rule());
    out.push(layout.footer.clone());
    out.push(layout.rule());

    out.join("\n")
}

// =============================================================================
// Unit Tests
// =============================================================================
