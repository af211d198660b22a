//! # App Error Type
//!
//! Unified error type for the `sufra` binary.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  config file ──── toml::de::Error ─────┐                               │
//! │  catalog file ─── std::io::Error ──────┤                               │
//! │  catalog JSON ─── CoreError ───────────┼──► AppError ──► log + exit 1  │
//! │  --toggle arg ─── InvalidAction ───────┤                               │
//! │  stdout ───────── serde_json::Error ───┘                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sufra_core::CoreError;
use thiserror::Error;

/// Result type alias for app operations.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file is not valid TOML for the expected shape.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Neither `--catalog` nor `[catalog] path` was given.
    #[error("No catalog snapshot given. Pass --catalog or set [catalog] path in the config file.")]
    MissingCatalog,

    // =========================================================================
    // Input Errors
    // =========================================================================
    /// A `--toggle`/`--deselect` argument is not `MODIFIER:OPTION`.
    #[error("Invalid action '{0}': expected MODIFIER:OPTION")]
    InvalidAction(String),

    /// Domain error from the customization engine.
    #[error(transparent)]
    Core(#[from] CoreError),

    // =========================================================================
    // I/O Errors
    // =========================================================================
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to write JSON output.
    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::InvalidAction("size".into()).to_string(),
            "Invalid action 'size': expected MODIFIER:OPTION"
        );

        let core: AppError = CoreError::MenuItemNotFound("kebab".into()).into();
        assert_eq!(core.to_string(), "Menu item not found: kebab");
    }
}
