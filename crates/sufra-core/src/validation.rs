//! # Validation Module
//!
//! Input validation for the boundary operations, and the catalog audit that
//! reports data-quality problems to the admin layer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Inputs to commit (quantity, item id)                                  │
//! │  └── validate_* ──► ValidationError (rejected)                         │
//! │                                                                         │
//! │  Catalog documents (modifiers)                                         │
//! │  └── audit_modifier ──► CatalogIssue (reported, never rejected)        │
//! │      The customization engine keeps working on flawed catalogs;        │
//! │      issues are logged and surfaced through `sufra audit`.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;
use crate::types::{Modifier, ModifierType};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Input Validators
// =============================================================================

/// Validates an order quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `max`
///
/// ## Example
/// ```rust
/// use sufra_core::validation::validate_quantity;
///
/// assert!(validate_quantity(2, 999).is_ok());
/// assert!(validate_quantity(0, 999).is_err());
/// assert!(validate_quantity(1000, 999).is_err());
/// ```
pub fn validate_quantity(qty: i64, max: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > max {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max,
        });
    }

    Ok(())
}

/// Validates a menu item id before a catalog lookup.
///
/// Must not be blank. Length is not capped: whatever id the catalog holds
/// can be looked up.
pub fn validate_menu_item_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "menu_item_id".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Audit
// =============================================================================

/// A data-quality problem in one modifier definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogIssue {
    pub modifier_id: String,
    #[serde(flatten)]
    pub kind: CatalogIssueKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum CatalogIssueKind {
    /// A single-select modifier flags more than one option as default.
    MultipleDefaultsOnSingle { defaults: Vec<String> },
    /// Required, but there is nothing to choose.
    RequiredWithoutOptions,
    /// `minSelections` above `maxSelections`: no selection can satisfy both.
    MinExceedsMax { min: u32, max: u32 },
    /// Required `minSelections` larger than the number of options.
    MinExceedsOptions { min: u32, options: usize },
    /// More defaults than `maxSelections` allows.
    DefaultsExceedMax { defaults: usize, max: u32 },
    /// Two options share an id.
    DuplicateOptionId { option: String },
    /// Bounds on a single-select modifier are ignored.
    BoundsOnSingle,
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "modifier {}: ", self.modifier_id)?;
        match &self.kind {
            CatalogIssueKind::MultipleDefaultsOnSingle { defaults } => write!(
                f,
                "single-select modifier has {} default options ({})",
                defaults.len(),
                defaults.join(", ")
            ),
            CatalogIssueKind::RequiredWithoutOptions => write!(f, "required but has no options"),
            CatalogIssueKind::MinExceedsMax { min, max } => {
                write!(f, "minSelections {min} exceeds maxSelections {max}")
            }
            CatalogIssueKind::MinExceedsOptions { min, options } => {
                write!(f, "minSelections {min} exceeds option count {options}")
            }
            CatalogIssueKind::DefaultsExceedMax { defaults, max } => {
                write!(f, "{defaults} default options exceed maxSelections {max}")
            }
            CatalogIssueKind::DuplicateOptionId { option } => write!(f, "duplicate option id {option}"),
            CatalogIssueKind::BoundsOnSingle => {
                write!(f, "selection bounds are ignored on a single-select modifier")
            }
        }
    }
}

/// Lists the data-quality problems of a modifier definition.
///
/// ## Example
/// ```rust
/// use sufra_core::validation::{audit_modifier, CatalogIssueKind};
/// use sufra_core::Modifier;
///
/// let m: Modifier = serde_json::from_str(r#"{
///     "id": "size", "name": "Size", "type": "single", "required": true, "options": []
/// }"#).unwrap();
///
/// let issues = audit_modifier(&m);
/// assert_eq!(issues[0].kind, CatalogIssueKind::RequiredWithoutOptions);
/// ```
pub fn audit_modifier(modifier: &Modifier) -> Vec<CatalogIssue> {
    let mut kinds = Vec::new();
    let defaults: Vec<String> = modifier.default_options().map(|o| o.id.clone()).collect();

    if modifier.required && modifier.options.is_empty() {
        kinds.push(CatalogIssueKind::RequiredWithoutOptions);
    }

    let mut seen = HashSet::new();
    for option in &modifier.options {
        if !seen.insert(option.id.as_str()) {
            kinds.push(CatalogIssueKind::DuplicateOptionId {
                option: option.id.clone(),
            });
        }
    }

    match modifier.kind {
        ModifierType::Single => {
            if defaults.len() > 1 {
                kinds.push(CatalogIssueKind::MultipleDefaultsOnSingle { defaults });
            }
            if modifier.min_selections.is_some() || modifier.max_selections.is_some() {
                kinds.push(CatalogIssueKind::BoundsOnSingle);
            }
        }
        ModifierType::Multiple => {
            if let (Some(min), Some(max)) = (modifier.min_selections, modifier.max_selections) {
                if min > max {
                    kinds.push(CatalogIssueKind::MinExceedsMax { min, max });
                }
            }
            if let Some(min) = modifier.min_selections {
                if modifier.required && !modifier.options.is_empty() && min as usize > modifier.options.len() {
                    kinds.push(CatalogIssueKind::MinExceedsOptions {
                        min,
                        options: modifier.options.len(),
                    });
                }
            }
            if let Some(max) = modifier.max_selections {
                if defaults.len() > max as usize {
                    kinds.push(CatalogIssueKind::DefaultsExceedMax {
                        defaults: defaults.len(),
                        max,
                    });
                }
            }
        }
    }

    kinds
        .into_iter()
        .map(|kind| CatalogIssue {
            modifier_id: modifier.id.clone(),
            kind,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::ModifierOption;

    fn modifier(kind: ModifierType, required: bool, defaults: &[bool]) -> Modifier {
        Modifier {
            id: "m".into(),
            name: "M".into(),
            kind,
            required,
            min_selections: None,
            max_selections: None,
            options: defaults
                .iter()
                .enumerate()
                .map(|(i, d)| ModifierOption {
                    id: format!("o{i}"),
                    name: format!("O{i}"),
                    price: Money::zero(),
                    is_default: *d,
                })
                .collect(),
        }
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1, 999).is_ok());
        assert!(validate_quantity(999, 999).is_ok());
        assert!(validate_quantity(0, 999).is_err());
        assert!(validate_quantity(-1, 999).is_err());
        assert!(validate_quantity(1000, 999).is_err());
    }

    #[test]
    fn test_validate_menu_item_id() {
        assert!(validate_menu_item_id("64f1c2a9e4b0a1b2c3d4e5f6").is_ok());
        assert!(validate_menu_item_id("  ").is_err());
        assert!(validate_menu_item_id(&"x".repeat(200)).is_ok());
        assert!(validate_menu_item_id(&"شاورما-دجاج-عربي-".repeat(10)).is_ok());
    }

    #[test]
    fn test_clean_modifier_has_no_issues() {
        let m = modifier(ModifierType::Single, true, &[false, true]);
        assert!(audit_modifier(&m).is_empty());
    }

    #[test]
    fn test_multiple_defaults_on_single() {
        let m = modifier(ModifierType::Single, false, &[true, false, true]);
        let issues = audit_modifier(&m);
        assert_eq!(
            issues[0].kind,
            CatalogIssueKind::MultipleDefaultsOnSingle {
                defaults: vec!["o0".into(), "o2".into()]
            }
        );
        assert_eq!(
            issues[0].to_string(),
            "modifier m: single-select modifier has 2 default options (o0, o2)"
        );
    }

    #[test]
    fn test_bounds_issues_on_multiple() {
        let mut m = modifier(ModifierType::Multiple, true, &[true, true, true]);
        m.min_selections = Some(4);
        m.max_selections = Some(2);

        let kinds: Vec<CatalogIssueKind> = audit_modifier(&m).into_iter().map(|i| i.kind).collect();
        assert!(kinds.contains(&CatalogIssueKind::MinExceedsMax { min: 4, max: 2 }));
        assert!(kinds.contains(&CatalogIssueKind::MinExceedsOptions { min: 4, options: 3 }));
        assert!(kinds.contains(&CatalogIssueKind::DefaultsExceedMax { defaults: 3, max: 2 }));
    }

    #[test]
    fn test_duplicate_ids_and_ignored_bounds() {
        let mut m = modifier(ModifierType::Single, false, &[false, false]);
        m.options[1].id = "o0".into();
        m.max_selections = Some(1);

        let kinds: Vec<CatalogIssueKind> = audit_modifier(&m).into_iter().map(|i| i.kind).collect();
        assert!(kinds.contains(&CatalogIssueKind::DuplicateOptionId { option: "o0".into() }));
        assert!(kinds.contains(&CatalogIssueKind::BoundsOnSingle));
    }

    #[test]
    fn test_issue_serializes_flat() {
        let m = modifier(ModifierType::Single, true, &[]);
        let json = serde_json::to_value(&audit_modifier(&m)[0]).unwrap();
        assert_eq!(json["modifierId"], "m");
        assert_eq!(json["issue"], "required_without_options");
    }
}
