//! Users command handler

use anyhow::Result;
use std::path::PathBuf;

use gsr::Config;

/// Handle the users command: print the sorted, deduplicated identity list.
pub fn handle(logs: Option<PathBuf>) -> Result<()> {
    let mut config = Config::load()?;
    super::override_logs_dir(&mut config, logs);

    let scanner = super::run_scan(&config)?;

    for identity in scanner.identities.iter() {
        println!("{}", identity);
    }

    Ok(())
}
