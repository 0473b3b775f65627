//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Blocklist Sync - Keep the game blocklist in step with the published ban feed
#[derive(Parser, Debug)]
#[command(name = "blocklist-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run; bare invocation syncs
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Fetch the ban feed and rewrite the local blocklist
    ///
    /// Entries already in the blocklist are kept as-is; feed entries are
    /// appended unless allowlisted or already present.
    ///
    /// Examples:
    ///   blocklist-sync sync
    ///   blocklist-sync sync --dry-run
    ///   blocklist-sync sync --data-dir /path/to/SaveData
    Sync {
        /// Preview the merge without writing the blocklist
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Ban feed endpoint override
        #[arg(long)]
        url: Option<String>,

        /// Save-data directory override
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Show counts for the local blocklist and allowlist
    Status {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Save-data directory override
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}
