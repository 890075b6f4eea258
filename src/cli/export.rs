//! Export CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::context::AppContext;
use crate::error::BuddyResult;
use crate::export::{write_export, ExportFormat};
use crate::storage::DocumentStore;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export all expenses as CSV
    Csv {
        /// Output directory (defaults to the configured export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export all expenses as JSON
    Json {
        /// Output directory (defaults to the configured export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command<S: DocumentStore>(
    ctx: &AppContext<S>,
    settings: &Settings,
    cmd: ExportCommands,
) -> BuddyResult<()> {
    let (format, output) = match cmd {
        ExportCommands::Csv { output } => (ExportFormat::Csv, output),
        ExportCommands::Json { output } => (ExportFormat::Json, output),
    };
    let dir = output.unwrap_or_else(|| settings.resolve_export_dir());

    match write_export(format, ctx.expenses(), &dir)? {
        Some(path) => println!(
            "Exported {} expenses to {} ({})",
            ctx.expenses().len(),
            path.display(),
            format.mime_type()
        ),
        None => println!("No data to export."),
    }

    Ok(())
}
