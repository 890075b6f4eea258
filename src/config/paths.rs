//! Path management for BudgetBuddy
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGETBUDDY_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/budgetbuddy` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BuddyError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BUDGETBUDDY_DATA_DIR";

/// Manages all paths used by BudgetBuddy
#[derive(Debug, Clone)]
pub struct BuddyPaths {
    base_dir: PathBuf,
}

impl BuddyPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BuddyError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "budgetbuddy")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    BuddyError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Root of the document store (`users/<id>/data/*.json` below it)
    pub fn store_root(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Registered accounts
    pub fn users_file(&self) -> PathBuf {
        self.base_dir.join("users.json")
    }

    /// The persisted session
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BuddyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BuddyError::Io(format!("Failed to create base directory: {}", e)))
    }
}
