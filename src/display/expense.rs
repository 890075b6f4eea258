//! Expense display formatting
//!
//! Renders expense listings as tables for the terminal.

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, DATE_FORMAT};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Title")]
    title: String,
}

/// Render a date, falling back to ISO form when the pattern can't render it
fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut rendered = String::new();
    if write!(rendered, "{}", date.format(date_format)).is_err() {
        rendered.clear();
        rendered.push_str(&date.format(DATE_FORMAT).to_string());
    }
    rendered
}

impl ExpenseRow {
    fn new(expense: &Expense, currency_symbol: &str, date_format: &str) -> Self {
        Self {
            id: expense.id.to_string(),
            date: format_date(expense.date, date_format),
            category: expense.category.label(),
            amount: expense.amount.format_with_symbol(currency_symbol),
            title: expense.title.clone(),
        }
    }
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(
    expenses: &[&Expense],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses
        .iter()
        .map(|e| ExpenseRow::new(e, currency_symbol, date_format));

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(3), Alignment::right());

    format!("{}\n", table)
}

/// Format one expense for confirmations
pub fn format_expense_details(expense: &Expense, currency_symbol: &str, date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("  ID:       {}\n", expense.id));
    output.push_str(&format!("  Title:    {}\n", expense.title));
    output.push_str(&format!(
        "  Amount:   {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("  Category: {}\n", expense.category));
    output.push_str(&format!(
        "  Date:     {}\n",
        format_date(expense.date, date_format)
    ));
    output
}
