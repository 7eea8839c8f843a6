//! User settings for the envelope ledger
//!
//! Manages the household's display name, currency, envelope caps and the
//! savings threshold used when banding the savings figure.

use serde::{Deserialize, Serialize};

use super::paths::EnvelopePaths;
use crate::error::EnvelopeError;
use crate::models::{EnvelopeSet, Money};
use crate::storage::file_io::{read_optional, write_atomic};

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Display name used in recaps and new ledgers
    #[serde(default)]
    pub username: String,

    /// Currency symbol appended to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Category budgets, in display order
    #[serde(default = "EnvelopeSet::household_defaults")]
    pub envelopes: EnvelopeSet,

    /// Savings below this amount (but not negative) are reported as low
    #[serde(default = "default_low_savings_threshold")]
    pub low_savings_threshold: Money,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_low_savings_threshold() -> Money {
    Money::from_units(100)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            username: String::new(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            envelopes: EnvelopeSet::household_defaults(),
            low_savings_threshold: default_low_savings_threshold(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &EnvelopePaths) -> Result<Self, EnvelopeError> {
        let settings_path = paths.settings_file();

        match read_optional(&settings_path)? {
            Some(contents) => serde_json::from_slice(&contents).map_err(|e| {
                EnvelopeError::Config(format!("Failed to parse settings file: {}", e))
            }),
            // Don't save yet - let caller decide when to persist
            None => Ok(Settings::default()),
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EnvelopePaths) -> Result<(), EnvelopeError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_vec_pretty(self).map_err(|e| {
            EnvelopeError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        write_atomic(paths.settings_file(), &contents)
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.envelopes, EnvelopeSet::household_defaults());
        assert_eq!(settings.low_savings_threshold, Money::from_units(100));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EnvelopePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.username = "Famille Martin".into();
        settings.envelopes.set("Vacances", Money::from_units(80)).unwrap();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"username": "Camille"}"#).unwrap();
        assert_eq!(settings.username, "Camille");
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.envelopes.len(), 7);
    }

    #[test]
    fn test_invalid_settings_file_is_a_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EnvelopePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ nope").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(EnvelopeError::Config(_))
        ));
    }
}
