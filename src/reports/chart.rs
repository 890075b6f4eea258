//! Spending chart data
//!
//! Builds the data behind the category pie chart: one slice per category in
//! the order categories first appear, with its share of total spending and a
//! color from a fixed palette. Rendering is left to the presentation layer;
//! `format_terminal` draws a legend with proportional bars.

use crate::models::{Expense, ExpenseCategory, Money};

use super::summary::category_totals;

/// Slice colors, cycled when there are more categories than colors
pub const PALETTE: [&str; 10] = [
    "#4CAF50", "#81C784", "#FFD54F", "#64B5F6", "#9575CD", "#FF8A65", "#A1887F", "#E0E0E0",
    "#795548", "#B0BEC5",
];

/// Width of the longest legend bar, in characters
const BAR_WIDTH: usize = 30;

/// One pie slice
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub category: ExpenseCategory,
    pub amount: Money,
    /// Share of total spending, 0-100
    pub percentage: f64,
    pub color: &'static str,
}

/// Pie chart data for a set of expenses
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub slices: Vec<ChartSlice>,
    pub total: Money,
}

impl ChartData {
    /// Build chart data from expenses
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let totals = category_totals(expenses);
        let total: Money = totals.iter().map(|t| t.amount).sum();

        let slices = totals
            .into_iter()
            .enumerate()
            .map(|(i, t)| ChartSlice {
                category: t.category,
                amount: t.amount,
                percentage: if total.is_zero() {
                    0.0
                } else {
                    (t.amount.cents() as f64 / total.cents() as f64) * 100.0
                },
                color: PALETTE[i % PALETTE.len()],
            })
            .collect();

        Self { slices, total }
    }

    /// No slices means there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.slices.iter().map(|s| s.category.label()).collect()
    }

    /// Format the chart legend for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.is_empty() {
            return "No data to display\n".to_string();
        }

        let mut output = String::new();
        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');

        for slice in &self.slices {
            let filled = ((slice.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
            output.push_str(&format!(
                "{:<14} {:<width$} {:>6.1}% {:>14}\n",
                slice.category.label(),
                "█".repeat(filled.max(1)),
                slice.percentage,
                slice.amount.format_with_symbol(currency_symbol),
                width = BAR_WIDTH
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<14} {:<width$} {:>7} {:>14}\n",
            "Total",
            "",
            "",
            self.total.format_with_symbol(currency_symbol),
            width = BAR_WIDTH
        ));

        output
    }
}
