//! Core data models for BudgetBuddy
//!
//! This module contains the data structures of the expense domain:
//! money amounts, identifiers, categories and expense records.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{ExpenseCategory, UnknownCategory};
pub use expense::{
    parse_positive_amount, Expense, ExpenseDraft, InputField, ValidationError, DATE_FORMAT,
};
pub use ids::{ExpenseId, UserId};
pub use money::{Money, MoneyParseError, DEFAULT_CURRENCY_SYMBOL, MAX_AMOUNT};
