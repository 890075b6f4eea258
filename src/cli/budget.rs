//! Budget goal CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use super::warn_if_incomplete;
use crate::config::Settings;
use crate::context::AppContext;
use crate::display::format_budget_status;
use crate::error::BuddyResult;
use crate::services::monthly_spending;
use crate::storage::DocumentStore;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget goal
    Set {
        /// Goal amount (e.g., "500" or "500.00")
        amount: String,
    },

    /// Show the goal and this month's spending against it
    Show,

    /// Remove the monthly budget goal
    Clear,
}

/// Handle a budget command
pub fn handle_budget_command<S: DocumentStore>(
    ctx: &mut AppContext<S>,
    settings: &Settings,
    today: NaiveDate,
    cmd: BudgetCommands,
) -> BuddyResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { amount } => {
            let report = ctx.set_budget_goal(&amount)?;
            println!(
                "Monthly budget goal set to {}",
                report.value.format_with_symbol(symbol)
            );
            warn_if_incomplete(&report);

            if let Some(line) = format_budget_status(&ctx.budget_status(today), symbol) {
                println!("{}", line);
            }
        }

        BudgetCommands::Show => match ctx.budget_goal() {
            Some(goal) if goal.is_positive() => {
                println!("Monthly goal:      {}", goal.format_with_symbol(symbol));
                println!(
                    "Spent this month:  {}",
                    monthly_spending(ctx.expenses(), today).format_with_symbol(symbol)
                );
                if let Some(line) = format_budget_status(&ctx.budget_status(today), symbol) {
                    println!("{}", line);
                }
            }
            _ => println!("No monthly budget goal set."),
        },

        BudgetCommands::Clear => {
            let report = ctx.clear_budget_goal()?;
            match report.value {
                Some(_) => println!("Monthly budget goal cleared."),
                None => println!("No monthly budget goal was set."),
            }
            warn_if_incomplete(&report);
        }
    }

    Ok(())
}
