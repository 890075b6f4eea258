use anyhow::Result;
use clap::{Parser, Subcommand};

use budgetbuddy::audit::AuditLogger;
use budgetbuddy::auth::LocalIdentityProvider;
use budgetbuddy::cli::{
    context_for, handle_auth_command, handle_budget_command, handle_categories, handle_chart,
    handle_expense_command, handle_export_command, handle_history, handle_reset, handle_summary,
    open_context, require_session, AuthCommands, BudgetCommands, ExpenseCommands, ExportCommands,
};
use budgetbuddy::config::{BuddyPaths, Settings};

#[derive(Parser)]
#[command(
    name = "budgetbuddy",
    version,
    about = "Personal expense tracker",
    long_about = "BudgetBuddy records your expenses, summarizes spending by day, \
                  week, month and category, and warns you when you go over your \
                  monthly budget goal."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign up, sign in and out
    #[command(subcommand)]
    Auth(AuthCommands),

    /// Add, list and delete expenses
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show spending totals and the category breakdown
    Summary,

    /// Show spending by category as a chart
    Chart,

    /// Manage the monthly budget goal
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export all expenses to a file
    #[command(subcommand)]
    Export(ExportCommands),

    /// List expense categories
    Categories,

    /// Delete all your expenses and settings
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BuddyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let mut provider = LocalIdentityProvider::open(paths.users_file(), paths.session_file());
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Some(Commands::Auth(cmd)) => {
            handle_auth_command(&mut provider, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            let session = require_session(&provider)?;
            let mut ctx = open_context(&paths, &settings, &session)?;
            handle_expense_command(&mut ctx, &settings, today, cmd)?;
        }
        Some(Commands::Summary) => {
            let session = require_session(&provider)?;
            let ctx = open_context(&paths, &settings, &session)?;
            handle_summary(&ctx, &settings, today)?;
        }
        Some(Commands::Chart) => {
            let session = require_session(&provider)?;
            let ctx = open_context(&paths, &settings, &session)?;
            handle_chart(&ctx, &settings)?;
        }
        Some(Commands::Budget(cmd)) => {
            let session = require_session(&provider)?;
            let mut ctx = open_context(&paths, &settings, &session)?;
            handle_budget_command(&mut ctx, &settings, today, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            let session = require_session(&provider)?;
            let ctx = open_context(&paths, &settings, &session)?;
            handle_export_command(&ctx, &settings, cmd)?;
        }
        Some(Commands::Categories) => {
            handle_categories()?;
        }
        Some(Commands::Reset { yes }) => {
            let session = require_session(&provider)?;
            let mut ctx = context_for(&paths, &settings, &session);
            // Reset also clears data that no longer loads
            if let Err(e) = ctx.load() {
                eprintln!("Warning: could not read your data: {}", e);
            }
            handle_reset(&mut ctx, yes)?;
        }
        Some(Commands::History { limit }) => {
            handle_history(&AuditLogger::new(paths.audit_log()), limit)?;
        }
        Some(Commands::Config) => {
            println!("BudgetBuddy Configuration");
            println!("=========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit log:       {}", if settings.audit_enabled { "on" } else { "off" });
            println!(
                "  Export dir:      {}",
                settings.resolve_export_dir().display()
            );
        }
        None => {
            println!("BudgetBuddy - personal expense tracker");
            println!();
            println!("Run 'budgetbuddy --help' for usage information.");
            println!("Run 'budgetbuddy auth signup <email>' to get started.");
        }
    }

    Ok(())
}
