//! Category listing, data reset and audit history commands

use std::io::{self, BufRead, Write};

use crate::audit::AuditLogger;
use crate::context::AppContext;
use crate::error::{BuddyError, BuddyResult};
use crate::models::ExpenseCategory;
use crate::storage::DocumentStore;

use super::warn_if_incomplete;

/// List the categories expenses can be filed under
pub fn handle_categories() -> BuddyResult<()> {
    println!("Categories:");
    for category in ExpenseCategory::all() {
        println!("  {}", category);
    }
    Ok(())
}

fn confirm(prompt: &str) -> BuddyResult<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout()
        .flush()
        .map_err(|e| BuddyError::Io(e.to_string()))?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| BuddyError::Io(format!("Failed to read confirmation: {}", e)))?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Delete all of the user's expenses and settings
pub fn handle_reset<S: DocumentStore>(ctx: &mut AppContext<S>, yes: bool) -> BuddyResult<()> {
    if !yes && !confirm("Delete ALL your expenses and your budget goal? This cannot be undone.")? {
        println!("Reset cancelled.");
        return Ok(());
    }

    let report = ctx.reset_all()?;
    println!("All data has been reset.");
    warn_if_incomplete(&report);
    Ok(())
}

/// Show the most recent audit log entries
pub fn handle_history(logger: &AuditLogger, limit: usize) -> BuddyResult<()> {
    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
