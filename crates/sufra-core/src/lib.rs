//! # sufra-core: Item Customization Engine
//!
//! Pure business logic for configuring a menu item before it goes to the
//! cart: modifier selection, constraint checks, price aggregation, and the
//! inventory-linked ingredient preview. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sufra Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        Data layer (items, modifiers, inventory documents)       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Catalog snapshot (in memory)           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sufra-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ selection │  │constraints│  │  pricing  │  │ inventory │  │   │
//! │  │   │  session  │  │           │  │           │  │   stock   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PricedSelection / OrderLine            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  Cart / order-line creation                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog shapes (Modifier, InventoryItem, ...) and outputs
//! - [`money`] - Money type with integer arithmetic
//! - [`stock`] - Stock status classification
//! - [`pricing`] - Price aggregation
//! - [`constraints`] - Selection legality and checkout eligibility
//! - [`selection`] - Selection state and default seeding
//! - [`session`] - The per-customer selection store and order-line commit
//! - [`inventory`] - Ingredient link resolution and deduction preview
//! - [`catalog`] - Menu items and the catalog snapshot
//! - [`validation`] - Input validation and catalog audit
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same catalog and actions, same result
//! 2. **No I/O**: fetching catalogs is the data layer's job
//! 3. **Integer Money**: prices are minor units inside the core
//! 4. **Normalize, don't fail**: illegal taps are no-ops, bad numbers read as 0
//!
//! ## Example Usage
//!
//! ```rust
//! use sufra_core::{Catalog, CustomizationSession, InitializerPolicy};
//!
//! let catalog = Catalog::from_json(r#"{
//!     "menuItems": [ { "id": "burger", "name": "Burger", "price": 20, "modifierIds": ["extras"] } ],
//!     "modifiers": [ {
//!         "id": "extras", "name": "Extras", "type": "multiple", "maxSelections": 2,
//!         "options": [
//!             { "id": "cheese", "name": "Cheese", "price": 3 },
//!             { "id": "egg", "name": "Egg", "price": 5 },
//!             { "id": "bacon", "name": "Bacon", "price": 6 }
//!         ]
//!     } ]
//! }"#).unwrap();
//!
//! let item = catalog.menu_item("burger").unwrap();
//! let mut session = CustomizationSession::for_menu_item(item, &catalog, InitializerPolicy::default());
//!
//! session.toggle("extras", "cheese");
//! session.toggle("extras", "egg");
//! session.toggle("extras", "bacon"); // over maxSelections: ignored
//!
//! assert_eq!(session.total_price().cents(), 2800);
//! assert!(session.can_checkout());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod constraints;
pub mod error;
pub mod inventory;
pub mod lenient;
pub mod money;
pub mod pricing;
pub mod selection;
pub mod session;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, MenuItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::{deduction_preview, required_links_resolved, resolve_links, ResolvedLink, StockDeduction};
pub use money::Money;
pub use pricing::aggregate_price;
pub use selection::{initialize_selection, InitializerPolicy, SelectionState};
pub use session::{CustomizationSession, OrderLine, PricedSelection};
pub use stock::classify_stock;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default upper bound on the quantity of one order line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (typing 100 instead of 10 on the kiosk).
/// Deployments can lower or raise it through configuration.
pub const MAX_ITEM_QUANTITY: i64 = 999;
