//! # Customizer Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --catalog ./menu.json                                              │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     SUFRA_CATALOG_PATH, SUFRA_FIRST_OPTION_FALLBACK,                   │
//! │     SUFRA_MAX_QUANTITY, SUFRA_LOG_LEVEL                                │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/customizer/customizer.toml (Linux)                       │
//! │     ~/Library/Application Support/com.sufra.customizer/... (macOS)     │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [catalog]
//! path = "/var/lib/sufra/catalog.json"
//!
//! [selection]
//! first_option_fallback = true
//!
//! [order]
//! max_quantity = 50
//!
//! [output]
//! pretty = true
//!
//! [logging]
//! level = "info,sufra=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use sufra_core::{InitializerPolicy, MAX_ITEM_QUANTITY};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Default catalog snapshot, used when `--catalog` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionSettings {
    /// Seed required single-select modifiers without a default with their
    /// first option.
    #[serde(default = "default_true")]
    pub first_option_fallback: bool,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        SelectionSettings {
            first_option_fallback: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSettings {
    /// Largest quantity accepted when committing a line.
    #[serde(default = "default_max_quantity")]
    pub max_quantity: i64,
}

impl Default for OrderSettings {
    fn default() -> Self {
        OrderSettings {
            max_quantity: default_max_quantity(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings { pretty: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_quantity() -> i64 {
    MAX_ITEM_QUANTITY
}

fn default_log_level() -> String {
    "info,sufra=debug".to_string()
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomizerConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub selection: SelectionSettings,

    #[serde(default)]
    pub order: OrderSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl CustomizerConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (customizer.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let explicit = config_path.is_some();
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                debug!(?path, "Loading customizer config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else if explicit {
                return Err(AppError::InvalidConfig(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.order.max_quantity <= 0 {
            return Err(AppError::InvalidConfig(
                "order.max_quantity must be greater than 0".into(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(AppError::InvalidConfig("logging.level must not be empty".into()));
        }

        Ok(())
    }

    /// Applies overrides looked up by environment variable name.
    ///
    /// Unparseable values are ignored with a warning.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("SUFRA_CATALOG_PATH") {
            debug!(path = %path, "Overriding catalog path from environment");
            self.catalog.path = Some(PathBuf::from(path));
        }

        if let Some(value) = lookup("SUFRA_FIRST_OPTION_FALLBACK") {
            match value.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.selection.first_option_fallback = true,
                "0" | "false" | "no" | "off" => self.selection.first_option_fallback = false,
                _ => warn!(value = %value, "Unknown SUFRA_FIRST_OPTION_FALLBACK value"),
            }
        }

        if let Some(value) = lookup("SUFRA_MAX_QUANTITY") {
            match value.parse::<i64>() {
                Ok(max) => self.order.max_quantity = max,
                Err(_) => warn!(value = %value, "Ignoring non-numeric SUFRA_MAX_QUANTITY"),
            }
        }

        if let Some(level) = lookup("SUFRA_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "sufra", "customizer")
            .map(|dirs| dirs.config_dir().join("customizer.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Policy handed to the selection initializer.
    pub fn initializer_policy(&self) -> InitializerPolicy {
        InitializerPolicy {
            first_option_fallback: self.selection.first_option_fallback,
        }
    }

    /// Resolves the catalog path: the flag wins over the config file.
    pub fn catalog_path(&self, flag: Option<PathBuf>) -> AppResult<PathBuf> {
        flag.or_else(|| self.catalog.path.clone())
            .ok_or(AppError::MissingCatalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CustomizerConfig::default();
        assert!(config.catalog.path.is_none());
        assert!(config.selection.first_option_fallback);
        assert_eq!(config.order.max_quantity, MAX_ITEM_QUANTITY);
        assert!(config.output.pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: CustomizerConfig = toml::from_str(
            r#"
            [selection]
            first_option_fallback = false

            [order]
            max_quantity = 20
            "#,
        )
        .unwrap();

        assert!(!config.selection.first_option_fallback);
        assert_eq!(config.order.max_quantity, 20);
        assert!(config.output.pretty);
        assert_eq!(config.logging.level, "info,sufra=debug");
        assert!(!config.initializer_policy().first_option_fallback);
    }

    #[test]
    fn test_config_validation() {
        let mut config = CustomizerConfig::default();
        config.order.max_quantity = 0;
        assert!(config.validate().is_err());

        config.order.max_quantity = 10;
        config.logging.level = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CustomizerConfig::default();
        config.apply_overrides(env(&[
            ("SUFRA_CATALOG_PATH", "/tmp/menu.json"),
            ("SUFRA_FIRST_OPTION_FALLBACK", "off"),
            ("SUFRA_MAX_QUANTITY", "12"),
            ("SUFRA_LOG_LEVEL", "warn"),
        ]));

        assert_eq!(config.catalog.path, Some(PathBuf::from("/tmp/menu.json")));
        assert!(!config.selection.first_option_fallback);
        assert_eq!(config.order.max_quantity, 12);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let mut config = CustomizerConfig::default();
        config.apply_overrides(env(&[
            ("SUFRA_FIRST_OPTION_FALLBACK", "maybe"),
            ("SUFRA_MAX_QUANTITY", "lots"),
        ]));

        assert!(config.selection.first_option_fallback);
        assert_eq!(config.order.max_quantity, MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_catalog_path_resolution() {
        let mut config = CustomizerConfig::default();
        assert!(matches!(config.catalog_path(None), Err(AppError::MissingCatalog)));

        config.catalog.path = Some(PathBuf::from("from-config.json"));
        assert_eq!(config.catalog_path(None).unwrap(), PathBuf::from("from-config.json"));
        assert_eq!(
            config.catalog_path(Some(PathBuf::from("flag.json"))).unwrap(),
            PathBuf::from("flag.json")
        );
    }

    #[test]
    fn test_missing_explicit_config_file_is_an_error() {
        let result = CustomizerConfig::load(Some(PathBuf::from("/nonexistent/sufra/customizer.toml")));
        assert!(matches!(result, Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&CustomizerConfig::default()).unwrap();
        assert!(toml_str.contains("[selection]"));
        assert!(toml_str.contains("[order]"));
    }
}
