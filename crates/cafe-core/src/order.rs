//! # Order
//!
//! The running list of items selected for one customer transaction.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │      Order::new()                                                       │
//! │           │                                                             │
//! │           ▼         add_item                                            │
//! │     ┌──────────┐ ─────────────────► ┌──────────┐ ──┐ add_item          │
//! │     │  Empty   │                    │ NonEmpty │   │ remove_item_at    │
//! │     └──────────┘ ◄───────────────── └──────────┘ ◄─┘ (len stays > 0)   │
//! │                   remove_item_at                                        │
//! │                   (last item)                                           │
//! │                                                                         │
//! │  No terminal state: the owner drops the order once it is billed        │
//! │  or abandoned.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Listeners
//! After every successful mutation each attached [`OrderListener`] is called
//! synchronously, in attachment order, with the change and a shared borrow of
//! the order as it is *after* the mutation. A shared borrow means a listener
//! cannot mutate the order it observes. A failed removal notifies nobody.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::error::{CoreError, CoreResult};
use crate::item::{MenuItem, Priced};
use crate::money::Money;

// =============================================================================
// Order State
// =============================================================================

/// Whether the order has anything in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    Empty,
    NonEmpty,
}

// =============================================================================
// Change Notifications
// =============================================================================

/// What just happened to an order.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderChange {
    /// `item` was appended at 0-based `index`.
    Added { index: usize, item: Arc<MenuItem> },
    /// `item` was taken out from 0-based `index`.
    Removed { index: usize, item: Arc<MenuItem> },
}

impl OrderChange {
    /// The item that was added or removed.
    pub fn item(&self) -> &Arc<MenuItem> {
        match self {
            OrderChange::Added { item, .. } | OrderChange::Removed { item, .. } => item,
        }
    }
}

/// Observer of order mutations.
///
/// Implementations must only observe (log, refresh a display, count).
/// Closures of the form `Fn(&OrderChange, &Order)` implement this trait.
pub trait OrderListener: Send {
    fn on_order_changed(&self, change: &OrderChange, order: &Order);
}

impl<F> OrderListener for F
where
    F: Fn(&OrderChange, &Order) + Send,
{
    fn on_order_changed(&self, change: &OrderChange, order: &Order) {
        self(change, order)
    }
}

/// Logs the item count after every change.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener;

impl OrderListener for TracingListener {
    fn on_order_changed(&self, change: &OrderChange, order: &Order) {
        let action = match change {
            OrderChange::Added { .. } => "added",
            OrderChange::Removed { .. } => "removed",
        };
        info!(
            action,
            item = change.item().name(),
            items = order.len(),
            "Order updated: {} item(s) in current order",
            order.len()
        );
    }
}

// =============================================================================
// Order
// =============================================================================

/// A mutable, in-progress order.
///
/// ## Invariants
/// - Items keep the order they were added in; removal shifts later items down
/// - The same catalog entry may appear any number of times (one per unit)
/// - Items are shared with the catalog, never copied
#[derive(Default)]
pub struct Order {
    items: Vec<Arc<MenuItem>>,
    listeners: Vec<Box<dyn OrderListener>>,
}

impl Order {
    /// Creates an empty order with no listeners.
    pub fn new() -> Self {
        Order {
            items: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Registers a listener for all *future* mutations.
    pub fn attach(&mut self, listener: impl OrderListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Appends an item and notifies listeners.
    pub fn add_item(&mut self, item: Arc<MenuItem>) {
        let index = self.items.len();
        self.items.push(Arc::clone(&item));
        self.notify(&OrderChange::Added { index, item });
    }

    /// Removes and returns the item at 0-based `index`.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::item::ItemFactory;
    /// use cafe_core::money::Money;
    /// use cafe_core::order::Order;
    /// use std::sync::Arc;
    ///
    /// let tea = Arc::new(ItemFactory::create_from_tag("drink", "Tea", Money::from_pence(200), "Regular").unwrap());
    /// let mut order = Order::new();
    /// order.add_item(tea.clone());
    ///
    /// assert!(order.remove_item_at(1).is_err()); // untouched
    /// assert!(Arc::ptr_eq(&order.remove_item_at(0).unwrap(), &tea));
    /// assert!(order.is_empty());
    /// ```
    pub fn remove_item_at(&mut self, index: usize) -> CoreResult<Arc<MenuItem>> {
        if index >= self.items.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let item = self.items.remove(index);
        self.notify(&OrderChange::Removed {
            index,
            item: Arc::clone(&item),
        });
        Ok(item)
    }

    /// Checks if the order has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of units in the order (duplicates counted separately).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Current state in the Empty / NonEmpty machine.
    pub fn state(&self) -> OrderState {
        if self.items.is_empty() {
            OrderState::Empty
        } else {
            OrderState::NonEmpty
        }
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[Arc<MenuItem>] {
        &self.items
    }

    /// Sum of the item prices; zero for an empty order.
    pub fn calculate_subtotal(&self) -> Money {
        self.items.iter().map(|item| item.price()).sum()
    }

    /// Numbered lines for display: `"1. Tea - £2.00"`.
    pub fn display_lines(&self) -> Vec<String> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item))
            .collect()
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&self, change: &OrderChange) {
        for listener in &self.listeners {
            listener.on_order_changed(change, self);
        }
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemFactory;
    use crate::types::ItemKind;
    use std::sync::Mutex;

    fn item(name: &str, pence: i64) -> Arc<MenuItem> {
        Arc::new(
            ItemFactory::create(ItemKind::Drink, name, Money::from_pence(pence), "Regular")
                .unwrap(),
        )
    }

    #[test]
    fn test_new_order_is_empty() {
        let order = Order::new();
        assert!(order.is_empty());
        assert_eq!(order.state(), OrderState::Empty);
        assert_eq!(order.calculate_subtotal(), Money::zero());
    }

    #[test]
    fn test_add_item() {
        let mut order = Order::new();
        order.add_item(item("Tea", 200));

        assert_eq!(order.len(), 1);
        assert_eq!(order.state(), OrderState::NonEmpty);
    }

    #[test]
    fn test_remove_item() {
        let tea = item("Tea", 200);
        let coffee = item("Coffee", 300);
        let mut order = Order::new();
        order.add_item(tea.clone());
        order.add_item(coffee.clone());

        let removed = order.remove_item_at(0).unwrap();

        assert!(Arc::ptr_eq(&removed, &tea));
        assert!(Arc::ptr_eq(&order.items()[0], &coffee));
        assert_eq!(order.calculate_subtotal(), Money::from_pence(300));
    }

    #[test]
    fn test_remove_last_item_returns_to_empty() {
        let mut order = Order::new();
        order.add_item(item("Tea", 200));
        order.remove_item_at(0).unwrap();

        assert_eq!(order.state(), OrderState::Empty);
    }

    #[test]
    fn test_remove_out_of_range_leaves_order_unchanged() {
        let mut order = Order::new();
        order.add_item(item("Tea", 200));

        let err = order.remove_item_at(1).unwrap_err();
        assert!(matches!(err, CoreError::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(order.len(), 1);

        assert!(Order::new().remove_item_at(0).is_err());
    }

    #[test]
    fn test_subtotal_calculation() {
        let mut order = Order::new();
        order.add_item(item("Tea", 200));
        order.add_item(item("Coffee", 300));

        assert_eq!(order.calculate_subtotal(), Money::from_pence(500));
    }

    #[test]
    fn test_subtotal_independent_of_add_order() {
        let prices = [280, 320, 300, 210, 260, 10, 10, 10];

        let mut forward = Order::new();
        prices.iter().for_each(|p| forward.add_item(item("x", *p)));

        let mut backward = Order::new();
        prices.iter().rev().for_each(|p| backward.add_item(item("x", *p)));

        assert_eq!(forward.calculate_subtotal(), Money::from_pence(1400));
        assert_eq!(forward.calculate_subtotal(), backward.calculate_subtotal());
    }

    #[test]
    fn test_duplicates_count_as_separate_units() {
        let latte = item("Latte", 320);
        let mut order = Order::new();
        order.add_item(latte.clone());
        order.add_item(latte.clone());

        assert_eq!(order.len(), 2);
        assert_eq!(order.calculate_subtotal(), Money::from_pence(640));
        assert_eq!(Arc::strong_count(&latte), 3);
    }

    #[test]
    fn test_reads_are_idempotent() {
        let mut order = Order::new();
        order.add_item(item("Tea", 200));

        assert_eq!(order.is_empty(), order.is_empty());
        assert_eq!(order.calculate_subtotal(), order.calculate_subtotal());
    }

    #[test]
    fn test_display_lines() {
        let mut order = Order::new();
        order.add_item(item("Tea", 200));
        order.add_item(item("Coffee", 300));

        assert_eq!(
            order.display_lines(),
            vec!["1. Tea - £2.00", "2. Coffee - £3.00"]
        );
    }

    #[test]
    fn test_listeners_see_post_mutation_state_in_order() {
        let log: Arc<Mutex<Vec<(usize, usize)>>> = Arc::new(Mutex::new(Vec::new()));

        let mut order = Order::new();
        for id in 0..2 {
            let log = Arc::clone(&log);
            order.attach(move |_: &OrderChange, o: &Order| {
                log.lock().unwrap().push((id, o.len()));
            });
        }

        order.add_item(item("Tea", 200));
        order.add_item(item("Coffee", 300));
        order.remove_item_at(0).unwrap();

        let log = log.lock().unwrap();
        assert_eq!(
            *log,
            vec![(0, 1), (1, 1), (0, 2), (1, 2), (0, 1), (1, 1)]
        );
    }

    #[test]
    fn test_listener_attached_mid_order_sees_only_later_changes() {
        let seen: Arc<Mutex<Vec<OrderChange>>> = Arc::new(Mutex::new(Vec::new()));
        let mut order = Order::new();
        order.add_item(item("Tea", 200));

        let sink = Arc::clone(&seen);
        order.attach(move |change: &OrderChange, _: &Order| {
            sink.lock().unwrap().push(change.clone());
        });
        let coffee = item("Coffee", 300);
        order.add_item(coffee.clone());

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0],
            OrderChange::Added {
                index: 1,
                item: coffee
            }
        );
    }

    #[test]
    fn test_failed_removal_does_not_notify() {
        let count = Arc::new(Mutex::new(0));
        let mut order = Order::new();
        let counter = Arc::clone(&count);
        order.attach(move |_: &OrderChange, _: &Order| *counter.lock().unwrap() += 1);

        assert!(order.remove_item_at(0).is_err());
        assert_eq!(*count.lock().unwrap(), 0);
        assert_eq!(order.listener_count(), 1);
    }

    #[test]
    fn test_tracing_listener_attaches() {
        let mut order = Order::new();
        order.attach(TracingListener);
        order.add_item(item("Tea", 200));
        assert_eq!(order.listener_count(), 1);
    }
}
