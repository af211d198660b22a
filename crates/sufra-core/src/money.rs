//! # Money Module
//!
//! Provides the `Money` type for handling menu prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Menu catalogs store prices as JSON numbers:                            │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A shawarma at 18.90 with two add-ons at 1.10 must total 21.10,        │
//! │  every time, in every summation order.                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (halalas / piastres / cents)         │
//! │    JSON 18.90 ──► Money(1890) at the boundary, integer math inside     │
//! │    Money(2110) ──► JSON 21.1 on the way out                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sufra_core::money::Money;
//!
//! // Create from minor units (preferred inside the core)
//! let price = Money::from_cents(1890); // 18.90
//!
//! // Arithmetic operations
//! let total = price + Money::from_cents(110);              // 20.00
//! let line = total.checked_multiply_quantity(2).unwrap();  // 40.00
//! assert_eq!(line.cents(), 4000);
//! ```
//!
//! The only place a float becomes `Money` is [`Money::from_major_lenient`],
//! used by the JSON boundary adapters in [`major_units`]. It caps values at
//! [`MAX_CATALOG_PRICE`] and addition saturates, so no catalog can make a
//! price computation panic or wrap.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

/// Minor units per major unit for every currency the restaurant prices in.
pub const MINOR_UNITS: i64 = 100;

/// Largest price a catalog value decodes to: one trillion major units.
pub const MAX_CATALOG_PRICE: Money = Money(1_000_000_000_000 * MINOR_UNITS);

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction stays total, even though catalog prices are never negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  MenuItem.price ──► base_price() ──┐                                   │
/// │                                    ├──► aggregate_price() ──► total    │
/// │  ModifierOption.price (× n) ───────┘                                   │
/// │                                                                         │
/// │  total × quantity ──► OrderLine.line_total                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use sufra_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal price from a catalog document into Money.
    ///
    /// Non-finite, zero and negative inputs all normalize to zero and values
    /// above [`MAX_CATALOG_PRICE`] are capped; catalog prices are never
    /// rejected.
    ///
    /// ## Example
    /// ```rust
    /// use sufra_core::money::{Money, MAX_CATALOG_PRICE};
    ///
    /// assert_eq!(Money::from_major_lenient(18.9).cents(), 1890);
    /// assert_eq!(Money::from_major_lenient(-3.0), Money::zero());
    /// assert_eq!(Money::from_major_lenient(f64::NAN), Money::zero());
    /// assert_eq!(Money::from_major_lenient(1e300), MAX_CATALOG_PRICE);
    /// ```
    pub fn from_major_lenient(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Money::zero();
        }
        let cents = (value * MINOR_UNITS as f64).round();
        if cents >= MAX_CATALOG_PRICE.0 as f64 {
            return MAX_CATALOG_PRICE;
        }
        Money(cents as i64)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    ///
    /// ## Example
    /// ```rust
    /// use sufra_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).major(), 10);
    /// assert_eq!(Money::from_cents(-550).major(), -5);
    /// ```
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_UNITS
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_UNITS).abs()
    }

    /// Returns the value in major units as a float, for the JSON boundary only.
    #[inline]
    pub fn as_major_f64(&self) -> f64 {
        self.0 as f64 / MINOR_UNITS as f64
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies a unit price by an order quantity.
    ///
    /// Returns `None` when the line total does not fit.
    ///
    /// ## Example
    /// ```rust
    /// use sufra_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2110);
    /// assert_eq!(unit_price.checked_multiply_quantity(3), Some(Money::from_cents(6330)));
    /// assert_eq!(Money::from_cents(i64::MAX / 2).checked_multiply_quantity(3), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(total) => Some(Money(total)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Currency-neutral display (`21.10`). Localized formatting belongs to the UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturating: a total never wraps past `i64::MAX`.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// JSON Boundary Adapter
// =============================================================================

/// Serde adapter: `Money` crosses the JSON boundary as a decimal number of
/// major units, the way the catalog documents store prices.
///
/// Decoding is lenient: numbers, numeric strings and null are accepted, and
/// anything unusable becomes zero.
///
/// ```rust
/// use serde::Deserialize;
/// use sufra_core::money::{self, Money};
///
/// #[derive(Deserialize)]
/// struct Row {
///     #[serde(with = "money::major_units")]
///     price: Money,
/// }
///
/// let row: Row = serde_json::from_str(r#"{ "price": "3.5" }"#).unwrap();
/// assert_eq!(row.price.cents(), 350);
/// let row: Row = serde_json::from_str(r#"{ "price": "free" }"#).unwrap();
/// assert_eq!(row.price, Money::zero());
/// ```
pub mod major_units {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Money;
    use crate::lenient;

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.as_major_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Money::from_major_lenient(lenient::number_or_zero(&value)))
    }

    /// Same as the parent adapter, for optional prices (`discountPrice`).
    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};

        use super::super::Money;
        use crate::lenient;

        pub fn serialize<S>(money: &Option<Money>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match money {
                Some(m) => serializer.serialize_some(&m.as_major_f64()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = Option::<serde_json::Value>::deserialize(deserializer)?;
            Ok(value
                .filter(|v| !v.is_null())
                .map(|v| Money::from_major_lenient(lenient::number_or_zero(&v))))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
