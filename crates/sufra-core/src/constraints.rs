//! # Selection Constraints
//!
//! Decides whether a selection change is legal and whether a configuration
//! may go to the cart.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              │ can_select           │ can_deselect        │ satisfied   │
//! │──────────────┼──────────────────────┼─────────────────────┼─────────────│
//! │ single       │ always               │ only if optional    │ exactly 1   │
//! │ multiple     │ below max, or        │ above min           │ ≥ min ?? 1  │
//! │              │ already selected     │                     │             │
//! │──────────────┴──────────────────────┴─────────────────────┴─────────────│
//! │ `satisfied` only applies to required modifiers; optional ones and      │
//! │ required modifiers without options are always satisfied.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::selection::SelectionState;
use crate::types::{Modifier, ModifierType};

/// Checks whether `option_id` may be added to the current selections.
///
/// Single-select never fills up: selecting replaces the previous choice.
pub fn can_select(modifier: &Modifier, current: &HashSet<String>, option_id: &str) -> bool {
    match modifier.kind {
        ModifierType::Single => true,
        ModifierType::Multiple => match modifier.max_selections {
            Some(max) => current.contains(option_id) || current.len() < max as usize,
            None => true,
        },
    }
}

/// Checks whether `option_id` may be removed from the current selections.
///
/// A required single-select must keep its choice; change it by selecting a
/// different option instead.
pub fn can_deselect(modifier: &Modifier, current: &HashSet<String>, _option_id: &str) -> bool {
    match modifier.kind {
        ModifierType::Single => !modifier.required,
        ModifierType::Multiple => match modifier.min_selections {
            Some(min) => current.len() > min as usize,
            None => true,
        },
    }
}

/// Checks whether a modifier's selections are complete enough for checkout.
pub fn is_satisfied(modifier: &Modifier, current: &HashSet<String>) -> bool {
    if !modifier.required || modifier.options.is_empty() {
        return true;
    }

    match modifier.kind {
        ModifierType::Single => current.len() == 1,
        ModifierType::Multiple => current.len() >= modifier.min_selections.unwrap_or(1) as usize,
    }
}

/// Checks every modifier of the item against the selection state.
pub fn can_checkout(modifiers: &[Modifier], state: &SelectionState) -> bool {
    modifiers
        .iter()
        .all(|m| is_satisfied(m, state.selections_for(&m.id)))
}

/// Names of the modifiers still blocking checkout, in catalog order.
pub fn unsatisfied<'a>(modifiers: &'a [Modifier], state: &SelectionState) -> Vec<&'a Modifier> {
    modifiers
        .iter()
        .filter(|m| !is_satisfied(m, state.selections_for(&m.id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::ModifierOption;

    fn modifier(kind: ModifierType, required: bool, min: Option<u32>, max: Option<u32>) -> Modifier {
        Modifier {
            id: "m".into(),
            name: "Modifier".into(),
            kind,
            required,
            min_selections: min,
            max_selections: max,
            options: ["a", "b", "c"]
                .iter()
                .map(|id| ModifierOption {
                    id: id.to_string(),
                    name: id.to_uppercase(),
                    price: Money::zero(),
                    is_default: false,
                })
                .collect(),
        }
    }

    fn set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_select_never_full() {
        let m = modifier(ModifierType::Single, true, None, None);
        assert!(can_select(&m, &set(&["a"]), "b"));
        assert!(can_select(&m, &set(&[]), "a"));
    }

    #[test]
    fn test_multiple_select_respects_max() {
        let m = modifier(ModifierType::Multiple, false, None, Some(2));
        assert!(can_select(&m, &set(&["a"]), "b"));
        assert!(!can_select(&m, &set(&["a", "b"]), "c"));
        // Re-selecting an already selected option is not blocked by the bound
        assert!(can_select(&m, &set(&["a", "b"]), "a"));
    }

    #[test]
    fn test_multiple_select_unbounded() {
        let m = modifier(ModifierType::Multiple, false, None, None);
        assert!(can_select(&m, &set(&["a", "b"]), "c"));
    }

    #[test]
    fn test_required_single_cannot_be_deselected() {
        let required = modifier(ModifierType::Single, true, None, None);
        let optional = modifier(ModifierType::Single, false, None, None);
        assert!(!can_deselect(&required, &set(&["a"]), "a"));
        assert!(can_deselect(&optional, &set(&["a"]), "a"));
    }

    #[test]
    fn test_multiple_deselect_respects_min() {
        let m = modifier(ModifierType::Multiple, false, Some(1), None);
        assert!(!can_deselect(&m, &set(&["a"]), "a"));
        assert!(can_deselect(&m, &set(&["a", "b"]), "a"));

        let unbounded = modifier(ModifierType::Multiple, true, None, None);
        assert!(can_deselect(&unbounded, &set(&["a"]), "a"));
    }

    #[test]
    fn test_is_satisfied() {
        let optional = modifier(ModifierType::Single, false, None, None);
        assert!(is_satisfied(&optional, &set(&[])));

        let single = modifier(ModifierType::Single, true, None, None);
        assert!(!is_satisfied(&single, &set(&[])));
        assert!(is_satisfied(&single, &set(&["a"])));
        assert!(!is_satisfied(&single, &set(&["a", "b"])));

        let multiple = modifier(ModifierType::Multiple, true, None, None);
        assert!(!is_satisfied(&multiple, &set(&[])));
        assert!(is_satisfied(&multiple, &set(&["c"])));

        let at_least_two = modifier(ModifierType::Multiple, true, Some(2), None);
        assert!(!is_satisfied(&at_least_two, &set(&["a"])));
        assert!(is_satisfied(&at_least_two, &set(&["a", "b"])));
    }

    #[test]
    fn test_required_without_options_is_vacuously_satisfied() {
        let mut m = modifier(ModifierType::Single, true, None, None);
        m.options.clear();
        assert!(is_satisfied(&m, &set(&[])));
    }

    #[test]
    fn test_can_checkout_and_unsatisfied() {
        let modifiers = vec![modifier(ModifierType::Single, true, None, None)];
        let mut state = SelectionState::default();
        assert!(!can_checkout(&modifiers, &state));
        assert_eq!(unsatisfied(&modifiers, &state).len(), 1);

        state.toggle(&modifiers[0], "b");
        assert!(can_checkout(&modifiers, &state));
        assert!(unsatisfied(&modifiers, &state).is_empty());
    }
}
