//! Report command handler

use anyhow::Result;
use std::path::PathBuf;

use gsr::{report, Config, StorageManager};

use crate::cli::ReportFormat;

/// Handle the report command: scan the logs, write the session report and
/// the user list, and print a run summary.
pub fn handle(logs: Option<PathBuf>, output: Option<PathBuf>, format: ReportFormat) -> Result<()> {
    let mut config = Config::load()?;
    super::override_logs_dir(&mut config, logs);
    if let Some(dir) = output {
        config.paths.output_dir = dir.to_string_lossy().into_owned();
    }

    let scanner = super::run_scan(&config)?;

    let storage = StorageManager::new(config.clone());
    let output_dir = storage.ensure_output_dir()?;

    let report_path = match format {
        ReportFormat::Csv => {
            let path = output_dir.join(&config.report.csv_filename);
            report::write_csv(&path, &scanner.sessions)?;
            path
        }
        ReportFormat::Json => {
            let mut path = output_dir.join(&config.report.csv_filename);
            path.set_extension("json");
            report::write_json(&path, &scanner.sessions)?;
            path
        }
    };

    let users_path = output_dir.join(&config.report.users_filename);
    report::write_users(&users_path, &scanner.identities)?;

    println!("{}", report::summary(&scanner));
    println!(
        "Wrote {} session records to {}",
        scanner.sessions.len(),
        report_path.display()
    );
    println!(
        "Extracted {} unique users to {}",
        scanner.identities.len(),
        users_path.display()
    );

    Ok(())
}
