//! # Selection State
//!
//! The mapping of modifier id → chosen option ids for the one item a customer
//! is configuring, and the rules that seed it.
//!
//! ## State Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  initialize_selection(modifiers)                                        │
//! │       │   explicit defaults ──► seeded                                  │
//! │       │   required single, no default ──► first option (policy)         │
//! │       │   otherwise ──► empty                                           │
//! │       ▼                                                                 │
//! │  SelectionState ──toggle(single, X)──► {X}                              │
//! │       │                                                                 │
//! │       ├──toggle(multiple, X) X selected ──► remove if can_deselect      │
//! │       ├──toggle(multiple, X) X missing  ──► insert if can_select        │
//! │       └──deselect(X) ──► remove if can_deselect                         │
//! │                                                                         │
//! │  Illegal actions are no-ops and return `false`.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constraints::{can_deselect, can_select};
use crate::types::{Modifier, ModifierType, SelectedModifier, SelectedOption};
use crate::validation::audit_modifier;

static NO_SELECTIONS: LazyLock<HashSet<String>> = LazyLock::new(HashSet::new);

// =============================================================================
// Selection State
// =============================================================================

/// Chosen option ids per modifier. Sets, not sequences: an option is either
/// selected or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selections: BTreeMap<String, HashSet<String>>,
}

impl SelectionState {
    /// Selected option ids for a modifier (empty when nothing is chosen).
    pub fn selections_for(&self, modifier_id: &str) -> &HashSet<String> {
        self.selections.get(modifier_id).unwrap_or(&NO_SELECTIONS)
    }

    pub fn is_selected(&self, modifier_id: &str, option_id: &str) -> bool {
        self.selections_for(modifier_id).contains(option_id)
    }

    /// Total number of selected options across all modifiers.
    pub fn selection_count(&self) -> usize {
        self.selections.values().map(HashSet::len).sum()
    }

    /// Applies a customer tap on an option.
    ///
    /// Returns `true` when the state changed. Options that do not belong to
    /// `modifier` and constraint violations leave the state untouched.
    pub fn toggle(&mut self, modifier: &Modifier, option_id: &str) -> bool {
        if !modifier.has_option(option_id) {
            debug!(modifier_id = %modifier.id, option_id, "Ignoring toggle of unknown option");
            return false;
        }

        let current = self.selections.entry(modifier.id.clone()).or_default();

        match modifier.kind {
            ModifierType::Single => {
                if current.len() == 1 && current.contains(option_id) {
                    return false;
                }
                current.clear();
                current.insert(option_id.to_string());
                true
            }
            ModifierType::Multiple => {
                if current.contains(option_id) {
                    if !can_deselect(modifier, current, option_id) {
                        debug!(modifier_id = %modifier.id, option_id, "Deselect blocked by minSelections");
                        return false;
                    }
                    current.remove(option_id);
                    true
                } else {
                    if !can_select(modifier, current, option_id) {
                        debug!(modifier_id = %modifier.id, option_id, "Select blocked by maxSelections");
                        return false;
                    }
                    current.insert(option_id.to_string());
                    true
                }
            }
        }
    }

    /// Removes an option without selecting a replacement.
    ///
    /// Only legal where [`can_deselect`] holds, so a required single-select
    /// can never be cleared this way.
    pub fn deselect(&mut self, modifier: &Modifier, option_id: &str) -> bool {
        let Some(current) = self.selections.get_mut(&modifier.id) else {
            return false;
        };
        if !current.contains(option_id) || !can_deselect(modifier, current, option_id) {
            return false;
        }
        current.remove(option_id)
    }

    /// Derives the output records, in catalog order, skipping modifiers with
    /// nothing selected.
    ///
    /// A repeated option id is emitted once, as its first occurrence, the same
    /// option [`Modifier::option`] resolves.
    pub fn selected_modifiers(&self, modifiers: &[Modifier]) -> Vec<SelectedModifier> {
        modifiers
            .iter()
            .filter_map(|modifier| {
                let chosen = self.selections_for(&modifier.id);
                let mut emitted = HashSet::new();
                let selected_options: Vec<SelectedOption> = modifier
                    .options
                    .iter()
                    .filter(|o| chosen.contains(&o.id) && emitted.insert(o.id.as_str()))
                    .map(SelectedOption::from)
                    .collect();

                (!selected_options.is_empty()).then(|| SelectedModifier {
                    modifier_id: modifier.id.clone(),
                    modifier_name: modifier.name.clone(),
                    selected_options,
                })
            })
            .collect()
    }
}

// =============================================================================
// Default Selection
// =============================================================================

/// Knobs for [`initialize_selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializerPolicy {
    /// Seed a required single-select modifier that has no explicit default
    /// with its first option in catalog order.
    pub first_option_fallback: bool,
}

impl Default for InitializerPolicy {
    fn default() -> Self {
        InitializerPolicy {
            first_option_fallback: true,
        }
    }
}

/// Seeds the selection state for a freshly opened item.
///
/// Deterministic: the same catalog always yields the same state, and nothing
/// from a previous state is carried over.
///
/// ## Example
/// ```rust
/// use sufra_core::{initialize_selection, InitializerPolicy, Modifier};
///
/// let size: Modifier = serde_json::from_str(r#"{
///     "id": "size", "name": "Size", "type": "single", "required": true,
///     "options": [ { "id": "s", "name": "Small" }, { "id": "l", "name": "Large" } ]
/// }"#).unwrap();
///
/// let state = initialize_selection(&[size], InitializerPolicy::default());
/// assert!(state.is_selected("size", "s"));
/// ```
pub fn initialize_selection(modifiers: &[Modifier], policy: InitializerPolicy) -> SelectionState {
    let mut state = SelectionState::default();

    for modifier in modifiers {
        for issue in audit_modifier(modifier) {
            warn!(modifier_id = %modifier.id, %issue, "Catalog data-quality issue");
        }

        let seeded = seed_modifier(modifier, policy);
        state.selections.insert(modifier.id.clone(), seeded);
    }

    state
}

fn seed_modifier(modifier: &Modifier, policy: InitializerPolicy) -> HashSet<String> {
    let defaults: Vec<&str> = modifier.default_options().map(|o| o.id.as_str()).collect();

    if !defaults.is_empty() {
        let keep = match (modifier.kind, modifier.max_selections) {
            (ModifierType::Single, _) => 1,
            (ModifierType::Multiple, Some(max)) => max as usize,
            (ModifierType::Multiple, None) => defaults.len(),
        };
        return defaults.into_iter().take(keep).map(str::to_string).collect();
    }

    if policy.first_option_fallback && modifier.required && modifier.is_single() {
        if let Some(first) = modifier.options.first() {
            debug!(modifier_id = %modifier.id, option_id = %first.id, "Seeding first option of required modifier");
            return HashSet::from([first.id.clone()]);
        }
    }

    HashSet::new()
}

// =============================================================================
// Unit Tests
// =============================================================================
