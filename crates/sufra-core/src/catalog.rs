//! # Catalog Snapshot
//!
//! The menu items, modifiers and inventory the data layer hands to the
//! engine, already fetched and in memory.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::{self, Money};
use crate::types::{InventoryItem, MenuItemInventoryLink, Modifier};
use crate::validation::validate_menu_item_id;

// =============================================================================
// Menu Item
// =============================================================================

/// A sellable dish as stored by the admin layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,

    pub name: String,

    /// List price.
    #[serde(default, with = "money::major_units")]
    #[ts(type = "number")]
    pub price: Money,

    /// Promotional price, when one is running.
    #[serde(default, with = "money::major_units::option", skip_serializing_if = "Option::is_none")]
    #[ts(type = "number | null")]
    pub discount_price: Option<Money>,

    /// Ids of the modifiers offered on this item, in display order.
    #[serde(default, alias = "modifiers")]
    pub modifier_ids: Vec<String>,

    #[serde(default)]
    pub inventory_items: Vec<MenuItemInventoryLink>,
}

impl MenuItem {
    /// The price option totals are added to.
    ///
    /// A discount only applies when it is positive and below the list price.
    ///
    /// ## Example
    /// ```rust
    /// use sufra_core::{MenuItem, Money};
    ///
    /// let item: MenuItem = serde_json::from_str(
    ///     r#"{ "id": "falafel", "name": "Falafel", "price": 12, "discountPrice": 9.5 }"#,
    /// ).unwrap();
    /// assert_eq!(item.base_price(), Money::from_cents(950));
    /// ```
    pub fn base_price(&self) -> Money {
        match self.discount_price {
            Some(discount) if discount.is_positive() && discount < self.price => discount,
            _ => self.price,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Everything the engine reads, as one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,

    #[serde(default)]
    pub modifiers: Vec<Modifier>,

    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
}

impl Catalog {
    /// Parses a catalog snapshot from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        debug!(
            menu_items = catalog.menu_items.len(),
            modifiers = catalog.modifiers.len(),
            inventory = catalog.inventory.len(),
            "Catalog snapshot loaded"
        );
        Ok(catalog)
    }

    /// Looks up a menu item by id.
    pub fn menu_item(&self, id: &str) -> CoreResult<&MenuItem> {
        validate_menu_item_id(id)?;
        let id = id.trim();
        self.menu_items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| CoreError::MenuItemNotFound(id.to_string()))
    }

    /// The modifiers offered on `item`, in the item's declared order.
    ///
    /// Ids with no matching modifier are skipped. An id listed twice yields
    /// the modifier once, at its first position.
    pub fn modifiers_for(&self, item: &MenuItem) -> Vec<Modifier> {
        let mut seen = HashSet::new();
        item.modifier_ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .filter_map(|id| {
                let found = self.modifiers.iter().find(|m| &m.id == id);
                if found.is_none() {
                    debug!(menu_item_id = %item.id, modifier_id = %id, "Menu item references unknown modifier");
                }
                found.cloned()
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::InitializerPolicy;
    use crate::session::CustomizationSession;

    const SNAPSHOT: &str = r#"{
        "menuItems": [
            {
                "id": "shawarma",
                "name": "شاورما دجاج",
                "price": 18,
                "discountPrice": 0,
                "modifierIds": ["extras", "missing", "size"],
                "inventoryItems": [ { "inventoryItemId": "chicken", "portion": 0.15, "required": true } ]
            }
        ],
        "modifiers": [
            { "id": "size", "name": "الحجم", "type": "single", "required": true,
              "options": [ { "id": "s", "name": "صغير", "price": 0 } ] },
            { "id": "extras", "name": "إضافات", "type": "multiple",
              "options": [ { "id": "cheese", "name": "جبنة", "price": 3 } ] }
        ],
        "inventory": [
            { "id": "chicken", "name": "دجاج", "currentStock": 8, "unit": "kg", "minStockLevel": 2 }
        ]
    }"#;

    #[test]
    fn test_from_json_and_lookup() {
        let catalog = Catalog::from_json(SNAPSHOT).unwrap();
        let item = catalog.menu_item("shawarma").unwrap();
        assert_eq!(item.price, Money::from_cents(1800));
        assert_eq!(item.inventory_items[0].portion, 0.15);
        assert!(matches!(
            catalog.menu_item("kebab"),
            Err(CoreError::MenuItemNotFound(_))
        ));
        assert!(matches!(catalog.menu_item(""), Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_modifiers_for_keeps_item_order_and_skips_unknown() {
        let catalog = Catalog::from_json(SNAPSHOT).unwrap();
        let item = catalog.menu_item("shawarma").unwrap();
        let ids: Vec<String> = catalog.modifiers_for(item).into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["extras", "size"]);
    }

    #[test]
    fn test_modifiers_for_ignores_repeated_ids() {
        let mut catalog = Catalog::from_json(SNAPSHOT).unwrap();
        catalog.modifiers[0].options[0].price = Money::from_cents(400);
        catalog.modifiers[0].options[0].is_default = true;

        let mut item = catalog.menu_item("shawarma").unwrap().clone();
        item.modifier_ids = vec!["size".into(), "extras".into(), "size".into()];

        let modifiers = catalog.modifiers_for(&item);
        let ids: Vec<&str> = modifiers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["size", "extras"]);

        let session = CustomizationSession::for_menu_item(&item, &catalog, InitializerPolicy::default());
        assert_eq!(session.selected_modifiers().len(), 1);
        assert_eq!(session.total_price(), Money::from_cents(2200));
    }

    #[test]
    fn test_base_price_ignores_useless_discounts() {
        let catalog = Catalog::from_json(SNAPSHOT).unwrap();
        let mut item = catalog.menu_item("shawarma").unwrap().clone();

        // discountPrice 0 decodes as Some(0) and is ignored
        assert_eq!(item.base_price(), Money::from_cents(1800));

        item.discount_price = Some(Money::from_cents(2000));
        assert_eq!(item.base_price(), Money::from_cents(1800));

        item.discount_price = Some(Money::from_cents(1500));
        assert_eq!(item.base_price(), Money::from_cents(1500));
    }

    #[test]
    fn test_invalid_json_is_invalid_catalog() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CoreError::InvalidCatalog(_))
        ));
    }
}
