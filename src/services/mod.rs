//! Service layer for BudgetBuddy
//!
//! Pure rules over the expense list: listing filters and budget goal
//! evaluation. Nothing here touches storage.

pub mod budget;
pub mod filter;

pub use budget::{evaluate_budget, monthly_spending, BudgetStatus};
pub use filter::{filter_expenses, CategoryFilter, ExpenseFilter};
