//! Blocklist Sync CLI
//!
//! One-shot synchronization of the game blocklist against the published
//! ban feed, honoring the user's allowlist and manual entries.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::SyncArgs;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Sync {
            dry_run,
            json,
            url,
            data_dir,
        }) => commands::run_sync(SyncArgs {
            dry_run,
            json,
            url,
            data_dir,
        }),
        Some(Commands::Status { json, data_dir }) => commands::run_status(json, data_dir),
        // The tool is a one-shot batch job; bare invocation syncs
        None => commands::run_sync(SyncArgs::default()),
    }
}
