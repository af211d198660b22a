//! # Domain Types
//!
//! The read-only catalog shapes the customization engine consumes, and the
//! derived records it hands back.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Modifier     │   │ ModifierOption  │   │ SelectedModifier│       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id, name       │──►│  id, name       │   │  modifierId     │       │
//! │  │  type           │   │  price (Money)  │   │  modifierName   │       │
//! │  │  required       │   │  isDefault      │   │  selectedOptions│       │
//! │  │  min/max        │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌─────────────────┐   │
//! │  │  InventoryItem  │◄──│ MenuItemInventoryLink│   │   StockStatus   │   │
//! │  │  ─────────────  │   │  ─────────────────── │   │  ─────────────  │   │
//! │  │  currentStock   │   │  inventoryItemId     │   │  out_of_stock   │   │
//! │  │  minStockLevel  │   │  portion, required   │   │  low_stock      │   │
//! │  │  unit           │   └─────────────────────┘   │  in_stock       │   │
//! │  └─────────────────┘                              └─────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All records cross the boundary as camelCase JSON. Numeric fields decode
//! leniently (see [`crate::lenient`]).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lenient;
use crate::money::{self, Money};

// =============================================================================
// Modifier Type
// =============================================================================

/// How many options of a modifier may be chosen at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ModifierType {
    /// Exactly one option at a time (sizes, bread type).
    Single,
    /// Zero or more options, bounded by `minSelections`/`maxSelections`.
    Multiple,
}

// =============================================================================
// Modifier Option
// =============================================================================

/// One selectable value within a [`Modifier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ModifierOption {
    pub id: String,

    pub name: String,

    /// Price delta added to the item when this option is chosen.
    #[serde(default, with = "money::major_units")]
    #[ts(type = "number")]
    pub price: Money,

    #[serde(default)]
    pub is_default: bool,
}

// =============================================================================
// Modifier
// =============================================================================

/// A configurable attribute of a menu item (size, add-ons, sauce).
///
/// `options` keeps catalog order: it drives display order and the
/// first-option fallback of the initializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub kind: ModifierType,

    #[serde(default)]
    pub required: bool,

    /// Lower bound on selections. Only meaningful for `multiple`.
    #[serde(
        default,
        with = "lenient::optional_count",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(type = "number | null")]
    pub min_selections: Option<u32>,

    /// Upper bound on selections. Only meaningful for `multiple`.
    #[serde(
        default,
        with = "lenient::optional_count",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(type = "number | null")]
    pub max_selections: Option<u32>,

    #[serde(default)]
    pub options: Vec<ModifierOption>,
}

impl Modifier {
    /// Looks up an option of this modifier by id. With repeated ids the
    /// first in catalog order wins.
    pub fn option(&self, option_id: &str) -> Option<&ModifierOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Checks whether `option_id` belongs to this modifier.
    #[inline]
    pub fn has_option(&self, option_id: &str) -> bool {
        self.option(option_id).is_some()
    }

    #[inline]
    pub fn is_single(&self) -> bool {
        self.kind == ModifierType::Single
    }

    /// Options flagged `isDefault`, in catalog order.
    pub fn default_options(&self) -> impl Iterator<Item = &ModifierOption> {
        self.options.iter().filter(|o| o.is_default)
    }
}

// =============================================================================
// Selected Modifier (output)
// =============================================================================

/// A chosen option, frozen with its name and price for the order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOption {
    pub id: String,
    pub name: String,
    #[serde(with = "money::major_units")]
    #[ts(type = "number")]
    pub price: Money,
}

impl From<&ModifierOption> for SelectedOption {
    fn from(option: &ModifierOption) -> Self {
        SelectedOption {
            id: option.id.clone(),
            name: option.name.clone(),
            price: option.price,
        }
    }
}

/// One entry per modifier with at least one selection.
///
/// Modifiers with nothing selected never appear in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SelectedModifier {
    pub modifier_id: String,
    pub modifier_name: String,
    pub selected_options: Vec<SelectedOption>,
}

// =============================================================================
// Inventory
// =============================================================================

/// A stock-tracked raw material (flour, chicken, tahini).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,

    pub name: String,

    #[serde(default, with = "lenient::non_negative")]
    #[ts(type = "number")]
    pub current_stock: f64,

    /// Unit of measure shown next to quantities (`kg`, `piece`, `ml`).
    #[serde(default)]
    pub unit: String,

    #[serde(default, with = "lenient::non_negative")]
    #[ts(type = "number")]
    pub min_stock_level: f64,
}

/// Declares that one unit of a menu item consumes `portion` units of an
/// [`InventoryItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemInventoryLink {
    #[serde(alias = "inventoryItem", alias = "itemId")]
    pub inventory_item_id: String,

    /// Units consumed per menu item sold. Unparseable or non-positive reads as 0.
    #[serde(default, with = "lenient::non_negative")]
    #[ts(type = "number")]
    pub portion: f64,

    #[serde(default)]
    pub required: bool,
}

// =============================================================================
// Stock Status
// =============================================================================

/// Derived stock classification. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

/// Stock status of an inventory link, which may point at nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LinkStockStatus {
    OutOfStock,
    LowStock,
    InStock,
    /// The link's inventory item is not in the catalog.
    Unknown,
}

impl From<StockStatus> for LinkStockStatus {
    fn from(status: StockStatus) -> Self {
        match status {
            StockStatus::OutOfStock => LinkStockStatus::OutOfStock,
            StockStatus::LowStock => LinkStockStatus::LowStock,
            StockStatus::InStock => LinkStockStatus::InStock,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
