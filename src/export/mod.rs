//! Export module for BudgetBuddy
//!
//! Projects the full expense list into file contents:
//! - CSV: `Title,Category,Amount,Date` for spreadsheets
//! - JSON: the lossless record list

pub mod csv;
pub mod json;

pub use csv::{export_csv, CSV_HEADER};
pub use json::{export_json, parse_json_export};

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{BuddyError, BuddyResult};
use crate::models::Expense;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// File name the export is saved under
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Csv => "budgetbuddy_expenses.csv",
            Self::Json => "budgetbuddy_expenses.json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }

    /// Render the expenses in this format; `None` when there is nothing to export
    pub fn render(&self, expenses: &[Expense]) -> BuddyResult<Option<String>> {
        match self {
            Self::Csv => export_csv(expenses),
            Self::Json => export_json(expenses),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = BuddyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(BuddyError::Export(format!(
                "Unknown export format '{}'. Use csv or json.",
                other
            ))),
        }
    }
}

/// Write an export file into `dir`
///
/// Returns the written path, or `None` when there was nothing to export.
pub fn write_export(
    format: ExportFormat,
    expenses: &[Expense],
    dir: &Path,
) -> BuddyResult<Option<PathBuf>> {
    let Some(contents) = format.render(expenses)? else {
        return Ok(None);
    };

    std::fs::create_dir_all(dir)
        .map_err(|e| BuddyError::Io(format!("Failed to create {}: {}", dir.display(), e)))?;

    let path = dir.join(format.file_name());
    std::fs::write(&path, contents)
        .map_err(|e| BuddyError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    Ok(Some(path))
}
