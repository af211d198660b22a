//! # Customization Session
//!
//! Owns the selection state of the one item a customer is configuring and
//! keeps its derived outputs current.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐   toggle / deselect   ┌──────────┐   commit   ┌────────┐ │
//! │  │  open()  │──────────────────────►│ editing  │───────────►│OrderLine│ │
//! │  │ (seeded) │◄──────── reset() ─────│          │            └────────┘ │
//! │  └──────────┘   (item changed)      └──────────┘                       │
//! │                                          │ drop                         │
//! │                                          ▼                              │
//! │                                     (cancelled)                         │
//! │                                                                         │
//! │  After every successful mutation: selected_modifiers and total_price   │
//! │  are recomputed before the call returns. can_checkout is evaluated     │
//! │  on read.                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A session is never shared. Two customers configuring the same dish each
//! hold their own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::catalog::{Catalog, MenuItem};
use crate::constraints;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::{self, Money};
use crate::pricing::aggregate_price;
use crate::selection::{initialize_selection, InitializerPolicy, SelectionState};
use crate::types::{Modifier, SelectedModifier};
use crate::validation::validate_quantity;

// =============================================================================
// Output Records
// =============================================================================

/// The current outcome of a session, as the cart UI consumes it.
///
/// `totalPrice` is per unit; quantity is applied at commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricedSelection {
    pub selected_modifiers: Vec<SelectedModifier>,

    #[serde(with = "money::major_units")]
    #[ts(type = "number")]
    pub total_price: Money,

    pub can_checkout: bool,

    /// Names of required modifiers still unsatisfied, for the
    /// "select required options" message.
    pub missing_required: Vec<String>,
}

/// A configured item frozen into a cart line.
///
/// Snapshot pattern: names and prices are copied so later catalog edits do
/// not change a line already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub id: String,

    pub menu_item_id: String,

    /// Item name at time of adding (frozen).
    pub name: String,

    pub selected_modifiers: Vec<SelectedModifier>,

    /// Base price plus options, per unit (frozen).
    #[serde(with = "money::major_units")]
    #[ts(type = "number")]
    pub unit_price: Money,

    pub quantity: i64,

    /// `unitPrice × quantity`.
    #[serde(with = "money::major_units")]
    #[ts(type = "number")]
    pub line_total: Money,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Session
// =============================================================================

/// Selection store for one item being configured by one customer.
#[derive(Debug, Clone)]
pub struct CustomizationSession {
    id: Uuid,
    opened_at: DateTime<Utc>,
    policy: InitializerPolicy,
    base_price: Money,
    modifiers: Vec<Modifier>,
    state: SelectionState,
    selected: Vec<SelectedModifier>,
    total_price: Money,
}

impl CustomizationSession {
    /// Opens a session over an already filtered modifier list.
    ///
    /// ## Example
    /// ```rust
    /// use sufra_core::{CustomizationSession, InitializerPolicy, Modifier, Money};
    ///
    /// let extras: Modifier = serde_json::from_str(r#"{
    ///     "id": "extras", "name": "Extras", "type": "multiple", "maxSelections": 2,
    ///     "options": [
    ///         { "id": "cheese", "name": "Cheese", "price": 3 },
    ///         { "id": "egg", "name": "Egg", "price": 5 }
    ///     ]
    /// }"#).unwrap();
    ///
    /// let mut session = CustomizationSession::open(
    ///     Money::from_cents(2000),
    ///     vec![extras],
    ///     InitializerPolicy::default(),
    /// );
    /// session.toggle("extras", "egg");
    /// session.toggle("extras", "cheese");
    /// assert_eq!(session.total_price().cents(), 2800);
    /// ```
    pub fn open(base_price: Money, modifiers: Vec<Modifier>, policy: InitializerPolicy) -> Self {
        let state = initialize_selection(&modifiers, policy);
        let mut session = CustomizationSession {
            id: Uuid::new_v4(),
            opened_at: Utc::now(),
            policy,
            base_price,
            modifiers,
            state,
            selected: Vec::new(),
            total_price: base_price,
        };
        session.recompute();

        debug!(
            session_id = %session.id,
            modifiers = session.modifiers.len(),
            total = %session.total_price,
            "Customization session opened"
        );
        session
    }

    /// Opens a session for a catalog menu item: resolves its base price and
    /// filters the modifier catalog by the item's declared modifier ids.
    pub fn for_menu_item(item: &MenuItem, catalog: &Catalog, policy: InitializerPolicy) -> Self {
        Self::open(item.base_price(), catalog.modifiers_for(item), policy)
    }

    /// Discards every selection and re-seeds from a new catalog.
    ///
    /// Used when the item or its modifiers change under an open session;
    /// nothing carries over.
    pub fn reset(&mut self, base_price: Money, modifiers: Vec<Modifier>) {
        self.base_price = base_price;
        self.modifiers = modifiers;
        self.state = initialize_selection(&self.modifiers, self.policy);
        self.recompute();
        debug!(session_id = %self.id, total = %self.total_price, "Customization session reset");
    }

    /// Applies a customer tap on an option.
    ///
    /// Returns `true` when the selection changed. Unknown ids and constraint
    /// violations are silent no-ops.
    pub fn toggle(&mut self, modifier_id: &str, option_id: &str) -> bool {
        let Some(modifier) = self.modifiers.iter().find(|m| m.id == modifier_id) else {
            debug!(session_id = %self.id, modifier_id, "Ignoring toggle on unknown modifier");
            return false;
        };

        let changed = self.state.toggle(modifier, option_id);
        if changed {
            self.recompute();
            debug!(session_id = %self.id, modifier_id, option_id, total = %self.total_price, "Toggle applied");
        }
        changed
    }

    /// Removes an option without choosing a replacement, where allowed.
    pub fn deselect(&mut self, modifier_id: &str, option_id: &str) -> bool {
        let Some(modifier) = self.modifiers.iter().find(|m| m.id == modifier_id) else {
            return false;
        };

        let changed = self.state.deselect(modifier, option_id);
        if changed {
            self.recompute();
            debug!(session_id = %self.id, modifier_id, option_id, total = %self.total_price, "Option deselected");
        }
        changed
    }

    fn recompute(&mut self) {
        self.selected = self.state.selected_modifiers(&self.modifiers);
        self.total_price = aggregate_price(self.base_price, &self.selected);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected_modifiers(&self) -> &[SelectedModifier] {
        &self.selected
    }

    /// Price per unit, including every selected option.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    pub fn can_checkout(&self) -> bool {
        constraints::can_checkout(&self.modifiers, &self.state)
    }

    /// Names of the required modifiers still blocking checkout.
    pub fn missing_required(&self) -> Vec<String> {
        constraints::unsatisfied(&self.modifiers, &self.state)
            .into_iter()
            .map(|m| m.name.clone())
            .collect()
    }

    pub fn priced_selection(&self) -> PricedSelection {
        PricedSelection {
            selected_modifiers: self.selected.clone(),
            total_price: self.total_price,
            can_checkout: self.can_checkout(),
            missing_required: self.missing_required(),
        }
    }

    // =========================================================================
    // Commit
    // =========================================================================

    /// Freezes the configuration into an order line and closes the session.
    ///
    /// ## Errors
    /// - `Validation` when `quantity` is outside `1..=max_quantity`, or when
    ///   the line total does not fit in `Money`
    /// - `RequiredSelectionMissing` when checkout is not yet allowed
    pub fn commit(self, item: &MenuItem, quantity: i64, max_quantity: i64) -> CoreResult<OrderLine> {
        validate_quantity(quantity, max_quantity)?;

        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(CoreError::RequiredSelectionMissing { modifiers: missing });
        }

        let line_total = self
            .total_price
            .checked_multiply_quantity(quantity)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "line_total".to_string(),
                min: 0,
                max: i64::MAX,
            })?;

        let line = OrderLine {
            id: Uuid::new_v4().to_string(),
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: self.total_price,
            quantity,
            line_total,
            selected_modifiers: self.selected,
            created_at: Utc::now(),
        };

        debug!(
            session_id = %self.id,
            line_id = %line.id,
            quantity,
            line_total = %line.line_total,
            "Customization committed"
        );
        Ok(line)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
