//! Coverage command handler

use anyhow::Result;
use std::path::PathBuf;

use gsr::Config;

/// Handle the coverage command: print the observed date span.
pub fn handle(logs: Option<PathBuf>) -> Result<()> {
    let mut config = Config::load()?;
    super::override_logs_dir(&mut config, logs);

    let scanner = super::run_scan(&config)?;

    match scanner.dates.summary() {
        Some(span) => println!("Coverage: {}", span),
        None => println!("No dated lines found."),
    }

    Ok(())
}
