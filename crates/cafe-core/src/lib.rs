//! # cafe-core: Pure Business Logic for the Café Counter
//!
//! Menu, order and billing logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Counter Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                apps/counter (terminal front-end)                │   │
//! │  │     menu ──► start ──► add / remove ──► finish ──► receipt      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ direct calls                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cafe-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  item    │ │  menu    │ │  order   │ │  tax / bill /    │  │   │
//! │  │   │ MenuItem │ │ Catalog  │ │  Order   │ │  receipt         │  │   │
//! │  │   │ Factory  │ │          │ │ Listener │ │                  │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • DETERMINISTIC                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Fixed-point `Money` (no floating point!)
//! - [`types`] - `TaxRate`, `ItemKind`
//! - [`item`] - `MenuItem` variants and the `ItemFactory`
//! - [`menu`] - `MenuCatalog` with 1-based lookup
//! - [`order`] - `Order`, its state machine and listeners
//! - [`tax`] - `TaxCalculator`
//! - [`bill`] - `BillGenerator` and `Receipt`
//! - [`receipt`] - fixed-width receipt text
//! - [`error`] / [`validation`] - typed errors and input rules
//!
//! ## Example Usage
//!
//! ```rust
//! use cafe_core::{BillGenerator, ItemFactory, MenuCatalog, Money, Order, TaxCalculator};
//!
//! let mut menu = MenuCatalog::new();
//! menu.add_item(ItemFactory::create_from_tag("drink", "Americano", Money::from_pence(280), "Regular").unwrap());
//! menu.add_item(ItemFactory::create_from_tag("drink", "Latte", Money::from_pence(320), "Large").unwrap());
//!
//! let mut order = Order::new();
//! order.add_item(menu.get_item(1).unwrap());
//! order.add_item(menu.get_item(2).unwrap());
//!
//! let receipt = BillGenerator::generate(&order, &TaxCalculator::default()).unwrap();
//! assert_eq!(receipt.subtotal().to_string(), "£6.00");
//! assert_eq!(receipt.tax().to_string(), "£0.60");
//! assert_eq!(receipt.total().to_string(), "£6.60");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bill;
pub mod error;
pub mod item;
pub mod menu;
pub mod money;
pub mod order;
pub mod receipt;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use bill::{BillGenerator, LineItem, Receipt};
pub use error::{CoreError, CoreResult, ValidationError};
pub use item::{DrinkItem, FoodItem, ItemFactory, MenuItem, Priced};
pub use menu::MenuCatalog;
pub use money::Money;
pub use order::{Order, OrderChange, OrderListener, OrderState, TracingListener};
pub use receipt::{render_receipt, ReceiptLayout};
pub use tax::TaxCalculator;
pub use types::{ItemKind, TaxRate};
