//! # Menu Catalog
//!
//! The operator-curated list of purchasable items.
//!
//! ## Positions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  What the operator sees          What is stored                        │
//! │                                                                         │
//! │  1. Americano - £2.80            items[0]                              │
//! │  2. Latte - £3.20                items[1]                              │
//! │  3. Hot Chocolate - £3.00        items[2]                              │
//! │                                                                         │
//! │  get_item(2) ──► items[1]        get_item(0) / get_item(4) ──► Err     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items are stored behind `Arc` so orders can reference catalog entries
//! without copying or owning them. The catalog is append-only.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::item::MenuItem;

/// Ordered, append-only collection of menu items.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<Arc<MenuItem>>,
}

impl MenuCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        MenuCatalog { items: Vec::new() }
    }

    /// Appends an item at the end of the menu. No duplicate check.
    pub fn add_item(&mut self, item: MenuItem) {
        self.items.push(Arc::new(item));
    }

    /// Looks up an item by its 1-based display position.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::item::ItemFactory;
    /// use cafe_core::menu::MenuCatalog;
    /// use cafe_core::money::Money;
    ///
    /// let mut menu = MenuCatalog::new();
    /// menu.add_item(ItemFactory::create_from_tag("drink", "Latte", Money::from_pence(320), "Large").unwrap());
    ///
    /// assert_eq!(menu.get_item(1).unwrap().to_string(), "Latte - £3.20");
    /// assert!(menu.get_item(0).is_err());
    /// assert!(menu.get_item(2).is_err());
    /// ```
    pub fn get_item(&self, position: usize) -> CoreResult<Arc<MenuItem>> {
        position
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
            .cloned()
            .ok_or(CoreError::PositionOutOfRange {
                position,
                size: self.items.len(),
            })
    }

    /// One `"name - £price"` line per item, in menu order.
    pub fn list_display_strings(&self) -> Vec<String> {
        self.items.iter().map(|item| item.to_string()).collect()
    }

    /// Iterates over the items in menu order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<MenuItem>> {
        self.items.iter()
    }

    /// Number of items on the menu.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the menu has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<MenuItem> for MenuCatalog {
    fn from_iter<I: IntoIterator<Item = MenuItem>>(iter: I) -> Self {
        MenuCatalog {
            items: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemFactory;
    use crate::money::Money;
    use crate::types::ItemKind;

    fn drink(name: &str, pence: i64) -> MenuItem {
        ItemFactory::create(ItemKind::Drink, name, Money::from_pence(pence), "Regular").unwrap()
    }

    #[test]
    fn test_add_and_get_item() {
        let mut menu = MenuCatalog::new();
        let latte = drink("Latte", 320);
        menu.add_item(latte.clone());

        assert_eq!(*menu.get_item(1).unwrap(), latte);
    }

    #[test]
    fn test_get_item_returns_shared_entry() {
        let mut menu = MenuCatalog::new();
        menu.add_item(drink("Latte", 320));

        let first = menu.get_item(1).unwrap();
        let second = menu.get_item(1).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_get_item_out_of_range() {
        let mut menu = MenuCatalog::new();
        menu.add_item(drink("Latte", 320));

        assert!(matches!(
            menu.get_item(0),
            Err(CoreError::PositionOutOfRange { position: 0, size: 1 })
        ));
        assert!(matches!(
            menu.get_item(2),
            Err(CoreError::PositionOutOfRange { position: 2, size: 1 })
        ));
        assert!(MenuCatalog::new().get_item(1).is_err());
    }

    #[test]
    fn test_show_menu() {
        let mut menu = MenuCatalog::new();
        menu.add_item(drink("Tea", 200));
        menu.add_item(drink("Coffee", 300));

        let lines = menu.list_display_strings();
        assert_eq!(lines, vec!["Tea - £2.00", "Coffee - £3.00"]);
    }

    #[test]
    fn test_duplicates_are_kept_in_insertion_order() {
        let menu: MenuCatalog = vec![drink("Tea", 200), drink("Tea", 200), drink("Mocha", 340)]
            .into_iter()
            .collect();

        assert_eq!(menu.len(), 3);
        assert!(!menu.is_empty());
        assert_eq!(menu.get_item(3).unwrap().to_string(), "Mocha - £3.40");
    }
}
