//! # Price Aggregation
//!
//! `total = basePrice + Σ selected option prices`
//!
//! The base price is whatever the caller resolved (list or discount, see
//! [`crate::MenuItem::base_price`]); this module knows nothing about
//! discounts. Results are never cached: the session recomputes after every
//! mutation.

use crate::money::Money;
use crate::types::SelectedModifier;

/// Computes the per-unit price of a configured item.
///
/// ## Example
/// ```rust
/// use sufra_core::{aggregate_price, Money, SelectedModifier, SelectedOption};
///
/// let extras = vec![SelectedModifier {
///     modifier_id: "extras".into(),
///     modifier_name: "Extras".into(),
///     selected_options: vec![
///         SelectedOption { id: "cheese".into(), name: "Cheese".into(), price: Money::from_cents(300) },
///         SelectedOption { id: "egg".into(), name: "Egg".into(), price: Money::from_cents(500) },
///     ],
/// }];
///
/// assert_eq!(aggregate_price(Money::from_cents(2000), &extras).cents(), 2800);
/// ```
pub fn aggregate_price(base_price: Money, selections: &[SelectedModifier]) -> Money {
    base_price
        + selections
            .iter()
            .flat_map(|m| m.selected_options.iter())
            .map(|o| o.price)
            .sum::<Money>()
}
