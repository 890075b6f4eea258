//! Reports module for BudgetBuddy
//!
//! Provides the spending summary (daily/weekly/monthly/category totals)
//! and the data behind the spending pie chart.

pub mod chart;
pub mod summary;

pub use chart::{ChartData, ChartSlice, PALETTE};
pub use summary::{CategoryTotal, ExpenseSummary, SummaryWindow};
