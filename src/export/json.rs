//! JSON export of the expense list
//!
//! The export is the bare expense array, pretty-printed, with the same field
//! names the stored document uses. It can be read back with
//! [`parse_json_export`].

use crate::error::{BuddyError, BuddyResult};
use crate::models::Expense;

/// Render expenses as pretty-printed JSON
///
/// Returns `Ok(None)` when there is nothing to export.
pub fn export_json(expenses: &[Expense]) -> BuddyResult<Option<String>> {
    if expenses.is_empty() {
        return Ok(None);
    }

    serde_json::to_string_pretty(expenses)
        .map(Some)
        .map_err(|e| BuddyError::Export(format!("Failed to serialize expenses: {}", e)))
}

/// Read a JSON export back into expenses
pub fn parse_json_export(contents: &str) -> BuddyResult<Vec<Expense>> {
    serde_json::from_str(contents)
        .map_err(|e| BuddyError::Export(format!("Invalid expense export: {}", e)))
}
