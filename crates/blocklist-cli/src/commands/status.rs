//! Status command implementation

use std::path::PathBuf;

use colored::Colorize;

use crate::error::Result;

use super::{load_config, resolve_layout};

/// Run the status command
///
/// Reads the local blocklist and allowlist and prints their counts without
/// fetching or writing anything.
pub fn run_status(json: bool, data_dir: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;
    let layout = resolve_layout(data_dir, &config)?;

    let report = blocklist_core::status(&layout)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.blocklist_present {
        println!(
            "{} {} users in {}",
            "blocklist".green().bold(),
            report.blocked,
            layout.blocklist_path().display()
        );
    } else {
        println!(
            "{} none at {}",
            "blocklist".yellow().bold(),
            layout.blocklist_path().display()
        );
    }

    if report.allowlist_present {
        println!(
            "{} {} ids in {}",
            "allowlist".green().bold(),
            report.allowlisted,
            layout.allowlist_path().display()
        );
    } else {
        println!(
            "{} none at {}",
            "allowlist".yellow().bold(),
            layout.allowlist_path().display()
        );
    }

    Ok(())
}
