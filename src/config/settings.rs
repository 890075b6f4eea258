//! User settings for BudgetBuddy
//!
//! Local preferences for the CLI. The monthly budget goal is not here: it
//! belongs to the user's `settings` document in the store.

use std::fmt::Write;
use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::BuddyPaths;
use crate::error::BuddyError;
use crate::models::{DATE_FORMAT, DEFAULT_CURRENCY_SYMBOL};
use crate::storage::write_json_atomic;

/// Local CLI preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether mutations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Where exports are written when no directory is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_date_format() -> String {
    DATE_FORMAT.to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            audit_enabled: default_audit_enabled(),
            export_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &BuddyPaths) -> Result<Self, BuddyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BuddyError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| BuddyError::Config(format!("Failed to parse settings file: {}", e)))?;

            if !is_valid_date_format(&settings.date_format) {
                return Err(BuddyError::Config(format!(
                    "Invalid date_format '{}' in {}",
                    settings.date_format,
                    settings_path.display()
                )));
            }
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BuddyPaths) -> Result<(), BuddyError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)?;
        Ok(())
    }

    /// Directory for exports: the configured one, else the working directory
    pub fn resolve_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Whether `format` is a strftime pattern that can render a calendar date
///
/// Time fields such as `%H` parse fine but fail when applied to a date.
pub fn is_valid_date_format(format: &str) -> bool {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDate::MIN.format(format)).is_ok()
}
