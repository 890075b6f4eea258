//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and budget status for the
//! terminal. Summaries and charts format themselves in `reports`.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_table};
pub use report::{format_budget_status, separator};
