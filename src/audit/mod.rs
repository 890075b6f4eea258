//! Audit logging for BudgetBuddy
//!
//! Records expense creates and deletes, budget goal changes and data resets
//! with before/after values in an append-only JSONL file.
//!
//! ```rust,ignore
//! use budgetbuddy::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(
//!     EntityType::Expense,
//!     expense.id.to_string(),
//!     Some(expense.title.clone()),
//!     &expense,
//! );
//! logger.log(&entry.by(user))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
