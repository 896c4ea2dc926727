//! # Counter Session
//!
//! Everything one operator needs to take orders at the counter.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Counter Session                                      │
//! │                                                                         │
//! │  ┌──────────┐ start_order ┌──────────┐ finish_order ┌──────────────┐   │
//! │  │ No Order │────────────►│  Active  │─────────────►│ BilledOrder  │   │
//! │  │          │◄────────────│  Order   │              │ (receipt)    │   │
//! │  └──────────┘ abandon /   └──────────┘              └──────────────┘   │
//! │       ▲       finish        │      ▲                                    │
//! │       │                     │      │                                    │
//! │       │            add_selection / remove_selection                     │
//! │       │                                                                 │
//! │       └── start_order again replaces the active order                   │
//! │                                                                         │
//! │  Menu positions and order lines are 1-based, as printed.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use cafe_core::{
    BillGenerator, MenuCatalog, MenuItem, Order, Priced, Receipt, ReceiptLayout, TaxCalculator,
    TracingListener,
};

use crate::config::CounterConfig;
use crate::error::{CounterError, CounterResult};

/// The order currently being taken.
#[derive(Debug)]
struct ActiveOrder {
    id: Uuid,
    order: Order,
}

/// A finished order: its receipt plus when and for which order it was issued.
#[derive(Debug, Clone, Serialize)]
pub struct BilledOrder {
    pub order_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub receipt: Receipt,
}

/// Catalog, pricing rules and at most one active order.
#[derive(Debug)]
pub struct CounterSession {
    catalog: MenuCatalog,
    tax: TaxCalculator,
    layout: ReceiptLayout,
    active: Option<ActiveOrder>,
}

impl CounterSession {
    pub fn new(catalog: MenuCatalog, tax: TaxCalculator, layout: ReceiptLayout) -> Self {
        CounterSession {
            catalog,
            tax,
            layout,
            active: None,
        }
    }

    /// Builds a session from validated configuration.
    pub fn from_config(config: &CounterConfig) -> CounterResult<Self> {
        Ok(Self::new(
            config.build_catalog()?,
            config.tax_calculator()?,
            config.receipt_layout(),
        ))
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn layout(&self) -> &ReceiptLayout {
        &self.layout
    }

    pub fn has_active_order(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the active order, if any.
    pub fn active_order_id(&self) -> Option<Uuid> {
        self.active.as_ref().map(|a| a.id)
    }

    /// Starts a fresh order, dropping any order already in progress.
    pub fn start_order(&mut self) -> Uuid {
        let mut order = Order::new();
        order.attach(TracingListener);

        let id = Uuid::new_v4();
        if let Some(previous) = self.active.replace(ActiveOrder { id, order }) {
            debug!(order_id = %previous.id, "Discarding unfinished order");
        }

        info!(order_id = %id, "Order started");
        id
    }

    /// Adds the menu item at 1-based `position` to the active order.
    pub fn add_selection(&mut self, position: usize) -> CounterResult<Arc<MenuItem>> {
        let active = self.active.as_mut().ok_or(CounterError::NoActiveOrder)?;
        let item = self.catalog.get_item(position)?;

        active.order.add_item(Arc::clone(&item));
        debug!(order_id = %active.id, item = item.name(), "Item added");

        Ok(item)
    }

    /// Removes 1-based order line `line` from the active order.
    pub fn remove_selection(&mut self, line: usize) -> CounterResult<Arc<MenuItem>> {
        let active = self.active.as_mut().ok_or(CounterError::NoActiveOrder)?;
        if active.order.is_empty() {
            return Err(CounterError::EmptyOrder("no items to remove"));
        }

        let len = active.order.len();
        let index = line
            .checked_sub(1)
            .filter(|i| *i < len)
            .ok_or(CounterError::InvalidLine { line, len })?;

        let item = active.order.remove_item_at(index)?;
        debug!(order_id = %active.id, item = item.name(), "Item removed");

        Ok(item)
    }

    /// Numbered lines of the active order.
    pub fn current_lines(&self) -> CounterResult<Vec<String>> {
        let active = self.active.as_ref().ok_or(CounterError::NoActiveOrder)?;
        Ok(active.order.display_lines())
    }

    /// Read-only view of the active order.
    pub fn current_order(&self) -> CounterResult<&Order> {
        self.active
            .as_ref()
            .map(|a| &a.order)
            .ok_or(CounterError::NoActiveOrder)
    }

    /// Bills the active order and closes it.
    ///
    /// The order stays open if billing fails, so exactly one receipt is
    /// ever issued per order.
    pub fn finish_order(&mut self) -> CounterResult<BilledOrder> {
        let active = self.active.as_ref().ok_or(CounterError::NoActiveOrder)?;
        if active.order.is_empty() {
            return Err(CounterError::EmptyOrder("cannot finish an empty order"));
        }

        let receipt = BillGenerator::generate(&active.order, &self.tax)?;
        let billed = BilledOrder {
            order_id: active.id,
            issued_at: Utc::now(),
            receipt,
        };
        self.active = None;

        info!(
            order_id = %billed.order_id,
            total = %billed.receipt.total(),
            "Order billed"
        );
        Ok(billed)
    }

    /// Drops the active order without billing it.
    pub fn abandon_order(&mut self) -> CounterResult<Uuid> {
        let active = self.active.take().ok_or(CounterError::NoActiveOrder)?;
        info!(order_id = %active.id, items = active.order.len(), "Order abandoned");
        Ok(active.id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
