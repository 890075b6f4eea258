//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the application context.

pub mod auth;
pub mod budget;
pub mod data;
pub mod expense;
pub mod export;
pub mod report;

pub use auth::{handle_auth_command, AuthCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use data::{handle_categories, handle_history, handle_reset};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_chart, handle_summary};

use crate::audit::AuditLogger;
use crate::auth::{IdentityProvider, Session};
use crate::config::{BuddyPaths, Settings};
use crate::context::{AppContext, MutationReport};
use crate::error::{BuddyError, BuddyResult};
use crate::storage::JsonFileStore;

/// The signed-in session, or `NotSignedIn`
pub fn require_session<P: IdentityProvider + ?Sized>(provider: &P) -> BuddyResult<Session> {
    provider
        .current_session()
        .cloned()
        .ok_or(BuddyError::NotSignedIn)
}

/// Build the user's context over the JSON store, not yet loaded
pub fn context_for(
    paths: &BuddyPaths,
    settings: &Settings,
    session: &Session,
) -> AppContext<JsonFileStore> {
    let ctx = AppContext::new(JsonFileStore::new(paths.store_root()), session.user_id);
    if settings.audit_enabled {
        ctx.with_audit(AuditLogger::new(paths.audit_log()))
    } else {
        ctx
    }
}

/// Build and load the user's context
pub fn open_context(
    paths: &BuddyPaths,
    settings: &Settings,
    session: &Session,
) -> BuddyResult<AppContext<JsonFileStore>> {
    let mut ctx = context_for(paths, settings, session);
    ctx.load()?;
    Ok(ctx)
}

/// Tell the user when a change only reached memory or missed the audit log
pub fn warn_if_incomplete<T>(report: &MutationReport<T>) {
    if let Some(e) = report.save.error() {
        eprintln!("Warning: your change could not be saved: {}", e);
    }
    if let Some(e) = &report.audit_error {
        eprintln!("Warning: your change was not recorded in the audit log: {}", e);
    }
}
