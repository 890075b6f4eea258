//! Expense CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use super::warn_if_incomplete;
use crate::config::Settings;
use crate::context::AppContext;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::BuddyResult;
use crate::models::{ExpenseDraft, DATE_FORMAT};
use crate::services::{CategoryFilter, ExpenseFilter};
use crate::storage::DocumentStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        title: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category (Food, Transport, Shopping, Bills, Entertainment, Health, Education, Other)
        #[arg(short, long)]
        category: String,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses in entry order
    List {
        /// Category to show, or "all"
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
        /// Earliest date (inclusive)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Latest date (inclusive)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (full UUID or the short form shown in listings)
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: DocumentStore>(
    ctx: &mut AppContext<S>,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> BuddyResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();

    match cmd {
        ExpenseCommands::Add {
            title,
            amount,
            category,
            date,
        } => {
            let date = date.unwrap_or_else(|| today.format(DATE_FORMAT).to_string());
            let report = ctx.add_expense(&ExpenseDraft::new(title, amount, category, date))?;
            println!("Added expense:");
            print!("{}", format_expense_details(&report.value, symbol, date_format));
            warn_if_incomplete(&report);

            if let Some(line) = ctx.budget_status(today).message(symbol) {
                println!();
                println!("{}", line);
            }
        }

        ExpenseCommands::List { category, from, to } => {
            let mut filter = ExpenseFilter::new();
            filter.category = category;
            filter.start_date = from;
            filter.end_date = to;

            let shown = ctx.filtered(&filter);
            print!("{}", format_expense_table(&shown, symbol, date_format));
            if !filter.is_unfiltered() {
                println!("Showing {} of {} expenses", shown.len(), ctx.expenses().len());
            }
        }

        ExpenseCommands::Delete { id } => {
            let report = ctx.delete_expense(&id)?;
            println!("Deleted expense: {}", report.value.describe());
            warn_if_incomplete(&report);
        }
    }

    Ok(())
}
