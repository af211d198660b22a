//! # Error Types
//!
//! Domain-specific error types for sufra-core.
//!
//! ## Where Errors Exist
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Surface                                   │
//! │                                                                         │
//! │  Customization engine (toggle, price, classify, resolve)               │
//! │  └── NO errors: illegal actions are no-ops, bad numbers read as 0,     │
//! │      dangling links resolve as `unknown`                                │
//! │                                                                         │
//! │  Boundary operations (this file)                                       │
//! │  ├── CoreError        - catalog lookup, snapshot parsing, commit       │
//! │  └── ValidationError  - input validation failures                      │
//! │                                                                         │
//! │  sufra-cli (separate crate)                                            │
//! │  └── AppError         - config, file I/O, output                       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by the boundary operations around the customization engine.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Menu item cannot be found in the catalog snapshot.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    /// A session was committed while a required modifier is unsatisfied.
    ///
    /// ## User Workflow
    /// ```text
    /// Tap "Add to cart"
    ///      │
    ///      ▼
    /// can_checkout() == false (size not chosen)
    ///      │
    ///      ▼
    /// RequiredSelectionMissing { modifiers: ["الحجم"] }
    ///      │
    ///      ▼
    /// UI shows: "Please select the required options"
    /// ```
    #[error("Required options not selected: {}", modifiers.join(", "))]
    RequiredSelectionMissing { modifiers: Vec<String> },

    /// The catalog snapshot could not be decoded.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::InvalidCatalog(err.to_string())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::RequiredSelectionMissing {
            modifiers: vec!["Size".to_string(), "Bread".to_string()],
        };
        assert_eq!(err.to_string(), "Required options not selected: Size, Bread");

        let err = CoreError::MenuItemNotFound("shawarma".to_string());
        assert_eq!(err.to_string(), "Menu item not found: shawarma");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "menu_item_id".to_string(),
        };
        assert_eq!(err.to_string(), "menu_item_id is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 999,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_json_error_converts_to_invalid_catalog() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::InvalidCatalog(_)));
    }
}
