//! # Stock Classification
//!
//! Turns a raw stock level into the badge the kitchen and the menu show.
//!
//! ```text
//!   currentStock ≤ 0              ──► out_of_stock
//!   currentStock ≤ minStockLevel  ──► low_stock
//!   otherwise                     ──► in_stock
//! ```
//!
//! First match wins, so an item with a zero threshold and zero stock is
//! `out_of_stock`, never `low_stock`.

use crate::lenient::clamp_non_negative;
use crate::types::StockStatus;

/// Classifies a stock level against its reorder threshold.
///
/// Total over all floats: negative and non-finite inputs are clamped to zero
/// before classification.
///
/// ## Example
/// ```rust
/// use sufra_core::{classify_stock, StockStatus};
///
/// assert_eq!(classify_stock(0.0, 10.0), StockStatus::OutOfStock);
/// assert_eq!(classify_stock(5.0, 10.0), StockStatus::LowStock);
/// assert_eq!(classify_stock(15.0, 10.0), StockStatus::InStock);
/// ```
pub fn classify_stock(current_stock: f64, min_stock_level: f64) -> StockStatus {
    let current = clamp_non_negative(current_stock);
    let minimum = clamp_non_negative(min_stock_level);

    if current <= 0.0 {
        StockStatus::OutOfStock
    } else if current <= minimum {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}
