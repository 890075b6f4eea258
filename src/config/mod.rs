//! Configuration module for BudgetBuddy
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - Local preference persistence

pub mod paths;
pub mod settings;

pub use paths::{BuddyPaths, DATA_DIR_ENV};
pub use settings::Settings;
