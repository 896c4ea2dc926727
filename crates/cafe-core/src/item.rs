//! # Menu Items
//!
//! The immutable catalog entries and the factory that builds them.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          MenuItem (enum)                                │
//! │                                                                         │
//! │   ┌─────────────────────────┐      ┌─────────────────────────┐         │
//! │   │  Food(FoodItem)         │      │  Drink(DrinkItem)       │         │
//! │   │  ─────────────────────  │      │  ─────────────────────  │         │
//! │   │  name      "Croissant"  │      │  name      "Latte"      │         │
//! │   │  price     £2.10        │      │  price     £3.20        │         │
//! │   │  category  "Pastry"     │      │  size      "Large"      │         │
//! │   └─────────────────────────┘      └─────────────────────────┘         │
//! │                                                                         │
//! │   Both implement `Priced` (name + price) and display as                │
//! │   "Latte - £3.20".                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items have no setters. Once the factory hands one out, its price is fixed
//! for the rest of the process.

use serde::Serialize;
use std::fmt;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::ItemKind;
use crate::validation::{validate_item_attribute, validate_item_name, validate_price};

// =============================================================================
// Priced capability
// =============================================================================

/// Anything that can appear on a menu or a receipt line.
pub trait Priced {
    /// Display name.
    fn name(&self) -> &str;

    /// Unit price.
    fn price(&self) -> Money;
}

// =============================================================================
// Variants
// =============================================================================

/// A food menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodItem {
    name: String,
    price: Money,
    category: String,
}

impl FoodItem {
    /// e.g. "Pastry", "Bakery".
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Priced for FoodItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        self.price
    }
}

/// A drink menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrinkItem {
    name: String,
    price: Money,
    size: String,
}

impl DrinkItem {
    /// e.g. "Regular", "Large".
    pub fn size(&self) -> &str {
        &self.size
    }
}

impl Priced for DrinkItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        self.price
    }
}

/// A catalog entry: one of the closed set of item variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuItem {
    Food(FoodItem),
    Drink(DrinkItem),
}

impl MenuItem {
    /// Which variant this is.
    pub fn kind(&self) -> ItemKind {
        match self {
            MenuItem::Food(_) => ItemKind::Food,
            MenuItem::Drink(_) => ItemKind::Drink,
        }
    }

    /// The variant-specific attribute: category for food, size for drinks.
    pub fn attribute(&self) -> &str {
        match self {
            MenuItem::Food(food) => food.category(),
            MenuItem::Drink(drink) => drink.size(),
        }
    }

    /// Returns the food payload, if this is food.
    pub fn as_food(&self) -> Option<&FoodItem> {
        match self {
            MenuItem::Food(food) => Some(food),
            MenuItem::Drink(_) => None,
        }
    }

    /// Returns the drink payload, if this is a drink.
    pub fn as_drink(&self) -> Option<&DrinkItem> {
        match self {
            MenuItem::Drink(drink) => Some(drink),
            MenuItem::Food(_) => None,
        }
    }
}

impl Priced for MenuItem {
    fn name(&self) -> &str {
        match self {
            MenuItem::Food(food) => food.name(),
            MenuItem::Drink(drink) => drink.name(),
        }
    }

    fn price(&self) -> Money {
        match self {
            MenuItem::Food(food) => food.price(),
            MenuItem::Drink(drink) => drink.price(),
        }
    }
}

/// Menu and order line rendering: `"{name} - £{price}"`.
impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name(), self.price())
    }
}

// =============================================================================
// Item Factory
// =============================================================================

/// Validated constructor for [`MenuItem`].
///
/// ## Flow
/// ```text
/// ("drink", "Latte", £3.20, "Large")
///      │
///      ▼
/// parse tag ──── unknown? ──► CoreError::InvalidItemType
///      │
///      ▼
/// validate name / price / attribute ──► CoreError::Validation
///      │
///      ▼
/// MenuItem::Drink { name: "Latte", price: £3.20, size: "Large" }
/// ```
pub struct ItemFactory;

impl ItemFactory {
    /// Builds an item of the given kind.
    ///
    /// Name and attribute are stored exactly as given; validation only looks
    /// at their trimmed length.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::item::{ItemFactory, Priced};
    /// use cafe_core::money::Money;
    /// use cafe_core::types::ItemKind;
    ///
    /// let latte = ItemFactory::create(ItemKind::Drink, "Latte", Money::from_pence(320), "Large").unwrap();
    /// assert_eq!(latte.name(), "Latte");
    /// assert_eq!(latte.as_drink().unwrap().size(), "Large");
    /// ```
    pub fn create(
        kind: ItemKind,
        name: &str,
        price: Money,
        attribute: &str,
    ) -> CoreResult<MenuItem> {
        validate_item_name(name)?;
        validate_price(price)?;
        validate_item_attribute(attribute)?;

        let name = name.to_string();
        let attribute = attribute.to_string();

        Ok(match kind {
            ItemKind::Food => MenuItem::Food(FoodItem {
                name,
                price,
                category: attribute,
            }),
            ItemKind::Drink => MenuItem::Drink(DrinkItem {
                name,
                price,
                size: attribute,
            }),
        })
    }

    /// Builds an item from a textual kind tag (`"food"` / `"drink"`).
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::item::ItemFactory;
    /// use cafe_core::money::Money;
    ///
    /// assert!(ItemFactory::create_from_tag("dessert", "Cake", Money::from_pence(300), "Sweet").is_err());
    /// ```
    pub fn create_from_tag(
        tag: &str,
        name: &str,
        price: Money,
        attribute: &str,
    ) -> CoreResult<MenuItem> {
        let kind = tag.parse::<ItemKind>()?;
        Self::create(kind, name, price, attribute)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    #[test]
    fn test_factory_creates_food_item() {
        let item =
            ItemFactory::create_from_tag("food", "Croissant", Money::from_pence(250), "Pastry")
                .unwrap();

        assert_eq!(item.kind(), ItemKind::Food);
        let food = item.as_food().expect("food variant");
        assert_eq!(food.name(), "Croissant");
        assert_eq!(food.price(), Money::from_pence(250));
        assert_eq!(food.category(), "Pastry");
        assert!(item.as_drink().is_none());
    }

    #[test]
    fn test_factory_creates_drink_item() {
        let item =
            ItemFactory::create_from_tag("drink", "Latte", Money::from_pence(320), "Large")
                .unwrap();

        assert_eq!(item.kind(), ItemKind::Drink);
        let drink = item.as_drink().expect("drink variant");
        assert_eq!(drink.name(), "Latte");
        assert_eq!(drink.price(), Money::from_pence(320));
        assert_eq!(drink.size(), "Large");
        assert_eq!(item.attribute(), "Large");
    }

    #[test]
    fn test_factory_invalid_type() {
        let err =
            ItemFactory::create_from_tag("dessert", "Cake", Money::from_pence(300), "Sweet")
                .unwrap_err();
        assert!(matches!(err, CoreError::InvalidItemType { .. }));
    }

    #[test]
    fn test_factory_rejects_negative_price() {
        let err = ItemFactory::create(ItemKind::Food, "Cake", Money::from_pence(-1), "Sweet")
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_factory_rejects_blank_name() {
        let err = ItemFactory::create(ItemKind::Drink, "  ", Money::from_pence(100), "Small")
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_factory_keeps_text_as_given() {
        let item =
            ItemFactory::create(ItemKind::Drink, " Tea ", Money::from_pence(200), " Regular ")
                .unwrap();
        assert_eq!(item.name(), " Tea ");
        assert_eq!(item.attribute(), " Regular ");
    }

    #[test]
    fn test_factory_rejects_tag_case_and_padding() {
        for tag in ["Drink", " drink ", "FOOD"] {
            assert!(matches!(
                ItemFactory::create_from_tag(tag, "Latte", Money::from_pence(320), "Large"),
                Err(CoreError::InvalidItemType { .. })
            ));
        }
    }

    #[test]
    fn test_display() {
        let item = ItemFactory::create(ItemKind::Drink, "Tea", Money::from_pence(200), "Regular")
            .unwrap();
        assert_eq!(item.to_string(), "Tea - £2.00");
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let item = ItemFactory::create(ItemKind::Food, "Banana Bread", Money::from_pence(260), "Bakery")
            .unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "food");
        assert_eq!(json["name"], "Banana Bread");
        assert_eq!(json["category"], "Bakery");
    }
}
