//! Command handlers for the GSR CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod coverage;
pub mod profiles;
pub mod report;
pub mod users;

use anyhow::{bail, Result};
use std::path::PathBuf;

use gsr::{scanner, Config, Scanner, StorageManager};

/// Apply a CLI logs-directory override to the loaded config.
pub fn override_logs_dir(config: &mut Config, logs: Option<PathBuf>) {
    if let Some(dir) = logs {
        config.paths.logs_dir = dir.to_string_lossy().into_owned();
    }
}

/// Run the scanning pass shared by the report, users, and coverage commands.
///
/// When the logs directory is missing it is created, the operator is told
/// what to put there, and the run fails with a non-zero exit. An existing
/// but empty directory scans cleanly to zero records.
pub fn run_scan(config: &Config) -> Result<Scanner> {
    let storage = StorageManager::new(config.clone());

    let logs_dir = storage.logs_dir();
    if !logs_dir.is_dir() {
        storage.create_logs_dir()?;
        eprintln!("Created missing logs folder at '{}'.", logs_dir.display());
        eprintln!(
            "Add .{} log files into it and re-run.",
            config.scan.extension
        );
        bail!("no log files to scan");
    }

    let files = storage.list_log_files()?;
    let scanner = scanner::scan_files(&files, &config.enabled_profiles(), config.scan.year)?;
    Ok(scanner)
}
