//! Sync command implementation

use std::path::PathBuf;

use colored::Colorize;

use blocklist_core::{SyncEngine, SyncOptions, SyncReport};
use blocklist_fetch::FeedClient;
use blocklist_fs::SyncConfig;
use blocklist_fs::constants::DEFAULT_FEED_URL;

use crate::error::Result;

use super::{load_config, resolve_layout};

/// Resolved inputs for the sync command.
#[derive(Debug, Default)]
pub struct SyncArgs {
    pub dry_run: bool,
    pub json: bool,
    pub url: Option<String>,
    pub data_dir: Option<PathBuf>,
}

/// Resolve the feed endpoint: flag > config file > built-in default.
fn resolve_url(flag: Option<String>, config: &SyncConfig) -> String {
    flag.or_else(|| config.feed_url.clone())
        .unwrap_or_else(|| DEFAULT_FEED_URL.to_string())
}

/// Run the sync command
///
/// Fetches the ban feed, merges it with the local blocklist and allowlist,
/// and rewrites the blocklist file.
pub fn run_sync(args: SyncArgs) -> Result<()> {
    let config = load_config()?;
    let layout = resolve_layout(args.data_dir, &config)?;
    let url = resolve_url(args.url, &config);

    if !args.json {
        println!("{} Fetching ban feed from {}...", "=>".blue().bold(), url.cyan());
    }

    let client = FeedClient::new(url)?;
    let engine = SyncEngine::new(layout, Box::new(client));

    let report = engine.sync(&SyncOptions {
        dry_run: args.dry_run,
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &SyncReport) {
    println!("   {} {} bytes received", "-".dimmed(), report.feed_bytes);
    if report.skipped_lines > 0 {
        println!(
            "   {} {} banned users resolved from feed, {} malformed lines skipped",
            "-".dimmed(),
            report.remote,
            report.skipped_lines
        );
    } else {
        println!(
            "   {} {} banned users resolved from feed",
            "-".dimmed(),
            report.remote
        );
    }
    println!(
        "   {} {} users in existing blocklist",
        "-".dimmed(),
        report.existing
    );
    println!("   {} {} ids in allowlist", "-".dimmed(), report.allowlist);

    println!(
        "{} Final blocklist has {} users: {} added, {} allowlisted, {} already blocked.",
        "OK".green().bold(),
        report.total,
        report.added,
        report.whitelisted,
        report.already_blocked
    );

    if report.wrote_file {
        println!("Wrote {}.", report.output_path.display().to_string().cyan());
    } else {
        println!(
            "{} Dry run: {} not written.",
            "NOTE".yellow().bold(),
            report.output_path.display()
        );
    }
}
