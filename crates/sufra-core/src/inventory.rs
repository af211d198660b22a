//! # Inventory Links
//!
//! Joins a menu item's declared ingredient links against the live inventory
//! catalog and attaches a stock classification to each one.
//!
//! ## Resolution Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  MenuItem.inventoryItems          Inventory catalog                     │
//! │  ───────────────────────          ─────────────────                     │
//! │  flour    0.2 kg  required ─────► flour   12 kg (min 5) ──► in_stock    │
//! │  tahini   0.05 kg          ─────► (missing)             ──► unknown     │
//! │  chicken  0.15 kg required ─────► chicken  3 kg (min 4) ──► low_stock   │
//! │                                                                         │
//! │  One ResolvedLink per declared link, in declaration order.              │
//! │  A dangling link never aborts its siblings.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is advisory: nothing is decremented. The order layer does
//! the real deduction when an order is placed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::stock::classify_stock;
use crate::types::{InventoryItem, LinkStockStatus, MenuItemInventoryLink};

// =============================================================================
// Resolved Link
// =============================================================================

/// An inventory link joined with the catalog.
///
/// `currentStock`, `unit` and `name` are absent when the link dangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLink {
    pub inventory_item_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stock: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    pub stock_status: LinkStockStatus,

    /// Units consumed by one menu item.
    pub consumption_preview: f64,

    pub required: bool,
}

impl ResolvedLink {
    /// Units consumed by `quantity` menu items.
    #[inline]
    pub fn consumption_for(&self, quantity: u32) -> f64 {
        self.consumption_preview * f64::from(quantity)
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.stock_status != LinkStockStatus::Unknown
    }
}

fn index_catalog(catalog: &[InventoryItem]) -> HashMap<&str, &InventoryItem> {
    catalog.iter().map(|item| (item.id.as_str(), item)).collect()
}

/// Resolves every link against the catalog, preserving declaration order.
///
/// ## Example
/// ```rust
/// use sufra_core::{resolve_links, InventoryItem, LinkStockStatus, MenuItemInventoryLink};
///
/// let catalog = vec![InventoryItem {
///     id: "flour".into(), name: "Flour".into(),
///     current_stock: 12.0, unit: "kg".into(), min_stock_level: 5.0,
/// }];
/// let links = vec![
///     MenuItemInventoryLink { inventory_item_id: "flour".into(), portion: 0.2, required: true },
///     MenuItemInventoryLink { inventory_item_id: "tahini".into(), portion: 0.05, required: false },
/// ];
///
/// let resolved = resolve_links(&links, &catalog);
/// assert_eq!(resolved[0].stock_status, LinkStockStatus::InStock);
/// assert_eq!(resolved[1].stock_status, LinkStockStatus::Unknown);
/// ```
pub fn resolve_links(links: &[MenuItemInventoryLink], catalog: &[InventoryItem]) -> Vec<ResolvedLink> {
    let index = index_catalog(catalog);

    links
        .iter()
        .map(|link| match index.get(link.inventory_item_id.as_str()) {
            Some(item) => ResolvedLink {
                inventory_item_id: link.inventory_item_id.clone(),
                name: Some(item.name.clone()),
                current_stock: Some(item.current_stock),
                unit: Some(item.unit.clone()),
                stock_status: classify_stock(item.current_stock, item.min_stock_level).into(),
                consumption_preview: link.portion,
                required: link.required,
            },
            None => {
                if link.required {
                    warn!(inventory_item_id = %link.inventory_item_id, "Required inventory link does not resolve");
                }
                ResolvedLink {
                    inventory_item_id: link.inventory_item_id.clone(),
                    name: None,
                    current_stock: None,
                    unit: None,
                    stock_status: LinkStockStatus::Unknown,
                    consumption_preview: link.portion,
                    required: link.required,
                }
            }
        })
        .collect()
}

/// Checks that every required link points at an item in the catalog.
///
/// Advisory for the fulfilment layer; it does not gate checkout.
pub fn required_links_resolved(links: &[MenuItemInventoryLink], catalog: &[InventoryItem]) -> bool {
    let index = index_catalog(catalog);
    links
        .iter()
        .filter(|link| link.required)
        .all(|link| index.contains_key(link.inventory_item_id.as_str()))
}

// =============================================================================
// Deduction Preview
// =============================================================================

/// What selling `quantity` units would do to one ingredient's stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StockDeduction {
    pub inventory_item_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// `portion × quantity`.
    pub required_quantity: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stock: Option<f64>,

    /// Stock left afterwards, floored at zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_after: Option<f64>,

    pub status_after: LinkStockStatus,

    /// Whether current stock covers the required quantity. Always false for
    /// dangling links.
    pub sufficient: bool,
}

/// Previews the stock effect of selling `quantity` units of a menu item.
///
/// ## Example
/// ```rust
/// use sufra_core::{deduction_preview, InventoryItem, LinkStockStatus, MenuItemInventoryLink};
///
/// let catalog = vec![InventoryItem {
///     id: "chicken".into(), name: "Chicken".into(),
///     current_stock: 3.0, unit: "kg".into(), min_stock_level: 1.0,
/// }];
/// let links = vec![MenuItemInventoryLink {
///     inventory_item_id: "chicken".into(), portion: 0.5, required: true,
/// }];
///
/// let preview = deduction_preview(&links, &catalog, 4);
/// assert_eq!(preview[0].required_quantity, 2.0);
/// assert_eq!(preview[0].remaining_after, Some(1.0));
/// assert_eq!(preview[0].status_after, LinkStockStatus::LowStock);
/// assert!(preview[0].sufficient);
/// ```
pub fn deduction_preview(
    links: &[MenuItemInventoryLink],
    catalog: &[InventoryItem],
    quantity: u32,
) -> Vec<StockDeduction> {
    let index = index_catalog(catalog);

    links
        .iter()
        .map(|link| {
            let required_quantity = link.portion * f64::from(quantity);
            match index.get(link.inventory_item_id.as_str()) {
                Some(item) => {
                    let remaining = (item.current_stock - required_quantity).max(0.0);
                    StockDeduction {
                        inventory_item_id: link.inventory_item_id.clone(),
                        unit: Some(item.unit.clone()),
                        required_quantity,
                        current_stock: Some(item.current_stock),
                        remaining_after: Some(remaining),
                        status_after: classify_stock(remaining, item.min_stock_level).into(),
                        sufficient: item.current_stock >= required_quantity,
                    }
                }
                None => StockDeduction {
                    inventory_item_id: link.inventory_item_id.clone(),
                    unit: None,
                    required_quantity,
                    current_stock: None,
                    remaining_after: None,
                    status_after: LinkStockStatus::Unknown,
                    sufficient: false,
                },
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
