//! BudgetBuddy - personal expense tracker
//!
//! This library provides the core of the BudgetBuddy expense tracker: expense
//! records, spending summaries over daily, weekly and monthly windows,
//! category breakdowns, a monthly budget goal with overrun warnings, and
//! CSV/JSON exports. User data lives in a per-user document store behind an
//! identity provider.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (expenses, categories, money, IDs)
//! - `reports`: Summary and chart aggregation
//! - `services`: Filtering and budget evaluation
//! - `storage`: Document store trait and its JSON-file and in-memory stores
//! - `auth`: Identity provider trait and the local provider
//! - `context`: Per-user state tying the above together
//! - `export`: CSV and JSON export
//! - `audit`: Audit logging system
//! - `config`: Configuration and path management
//! - `display`, `cli`: Terminal output and command handlers
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use budgetbuddy::context::AppContext;
//! use budgetbuddy::models::{ExpenseDraft, UserId};
//! use budgetbuddy::storage::MemoryStore;
//!
//! let mut ctx = AppContext::new(MemoryStore::new(), UserId::new());
//! ctx.load()?;
//! ctx.add_expense(&ExpenseDraft::new("Coffee", "3.50", "Food", "2024-01-10"))?;
//! println!("{}", ctx.summary(today).format_terminal("₹"));
//! ```

pub mod audit;
pub mod auth;
pub mod cli;
pub mod config;
pub mod context;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use context::{AppContext, MutationReport, SaveStatus};
pub use error::{BuddyError, BuddyResult};
