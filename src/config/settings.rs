//! User settings for the ledger
//!
//! Manages preferences such as ledger capacity, currency symbol and the
//! description column width used by the table views.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Default maximum number of transactions
pub const DEFAULT_CAPACITY: usize = 1000;

/// Narrowest description column that still fits a truncation marker
const MIN_DESCRIPTION_WIDTH: usize = 4;

/// User settings for the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Maximum number of transactions the ledger may hold
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Currency symbol prefixed to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Width of the description column in table views
    #[serde(default = "default_description_width")]
    pub description_width: usize,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_description_width() -> usize {
    30
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            capacity: default_capacity(),
            currency_symbol: default_currency(),
            description_width: default_description_width(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        let settings: Settings = read_json(&settings_path).map_err(|e| {
            LedgerError::Config(format!(
                "Failed to read settings file {}: {}",
                settings_path.display(),
                e
            ))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
            .map_err(|e| LedgerError::Config(format!("Failed to write settings file: {}", e)))
    }

    /// Check that the settings describe a usable ledger
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.capacity == 0 {
            return Err(LedgerError::Config("capacity must be at least 1".into()));
        }

        if self.description_width < MIN_DESCRIPTION_WIDTH {
            return Err(LedgerError::Config(format!(
                "description_width must be at least {}",
                MIN_DESCRIPTION_WIDTH
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.capacity, 1000);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.description_width, 30);
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            capacity: 50,
            currency_symbol: "€".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.capacity, 50);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"capacity": 5}"#).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.capacity, 5);
        assert_eq!(loaded.description_width, 30);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let settings = Settings {
            capacity: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
