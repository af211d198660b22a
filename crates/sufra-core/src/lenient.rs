//! # Lenient Numeric Decoding
//!
//! Catalog documents are edited by hand in the admin screens, so numeric
//! fields arrive as numbers, numeric strings, empty strings or null. The core
//! never rejects such a document: anything that is not a finite, non-negative
//! number reads as `0`.
//!
//! ```text
//!   12        ──► 12.0
//!   "0.25"    ──► 0.25
//!   "" / null ──► 0.0
//!   -4        ──► 0.0
//!   "abc"     ──► 0.0
//! ```

use serde_json::Value;

/// Coerces a JSON value into a finite, non-negative number.
pub fn number_or_zero(value: &Value) -> f64 {
    let raw = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    clamp_non_negative(raw)
}

/// Clamps a float to `[0, ∞)`, mapping NaN and infinities to zero.
#[inline]
pub fn clamp_non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Serde adapter for quantities such as `portion` or `currentStock`.
pub mod non_negative {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(super::number_or_zero(&value))
    }
}

/// Serde adapter for optional counts such as `maxSelections`.
///
/// A missing, null or unusable bound reads as "no bound" rather than zero.
pub mod optional_count {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(n) => serializer.serialize_some(n),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| match v {
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(s) => s.trim().parse::<u32>().ok(),
            _ => None,
        }))
    }
}
