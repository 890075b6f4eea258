//! Summary and chart CLI commands

use chrono::NaiveDate;

use crate::config::Settings;
use crate::context::AppContext;
use crate::display::{format_budget_status, separator};
use crate::error::BuddyResult;
use crate::storage::DocumentStore;

/// Print totals for today, this week, this month and by category
pub fn handle_summary<S: DocumentStore>(
    ctx: &AppContext<S>,
    settings: &Settings,
    today: NaiveDate,
) -> BuddyResult<()> {
    let symbol = settings.currency_symbol.as_str();
    print!("{}", ctx.summary(today).format_terminal(symbol));

    if let Some(line) = format_budget_status(&ctx.budget_status(today), symbol) {
        println!("{}", separator(40));
        println!("{}", line);
    }

    Ok(())
}

/// Print the spending-by-category chart
pub fn handle_chart<S: DocumentStore>(ctx: &AppContext<S>, settings: &Settings) -> BuddyResult<()> {
    print!("{}", ctx.chart().format_terminal(&settings.currency_symbol));
    Ok(())
}
