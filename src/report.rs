//! Report emission.
//!
//! Serializes the aggregated state: the session table as CSV (or JSON),
//! the identity set as a sorted user list, and a console summary of the
//! run. Fields a session never carried render as empty strings in CSV and
//! are omitted from JSON.

use anyhow::{Context, Result};
use humansize::{format_size, BINARY};
use std::fs;
use std::path::Path;

use crate::scanner::{fields, IdentitySet, Scanner, SessionTable};

/// Write the session table as CSV with the canonical header.
///
/// One row per distinct session key, in first-seen order.
pub fn write_csv(path: &Path, sessions: &SessionTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create report file: {:?}", path))?;

    writer
        .write_record(fields::COLUMNS)
        .context("Failed to write report header")?;

    for (_, record) in sessions.iter() {
        writer
            .write_record(fields::COLUMNS.iter().map(|&col| record.get(col).unwrap_or("")))
            .context("Failed to write report row")?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush report file: {:?}", path))?;
    Ok(())
}

/// Write the session table as a JSON array of objects.
///
/// Only observed fields appear in each object.
pub fn write_json(path: &Path, sessions: &SessionTable) -> Result<()> {
    let records: Vec<serde_json::Value> = sessions
        .iter()
        .map(|(_, record)| {
            let mut object = serde_json::Map::new();
            for column in fields::COLUMNS {
                if let Some(value) = record.get(column) {
                    object.insert(column.to_string(), serde_json::Value::String(value.to_string()));
                }
            }
            serde_json::Value::Object(object)
        })
        .collect();

    let contents =
        serde_json::to_string_pretty(&records).context("Failed to serialize session records")?;
    fs::write(path, contents).with_context(|| format!("Failed to write report file: {:?}", path))?;
    Ok(())
}

/// Write the sorted, deduplicated user list, one identity per line.
pub fn write_users(path: &Path, identities: &IdentitySet) -> Result<()> {
    let mut contents = String::new();
    for identity in identities.iter() {
        contents.push_str(identity);
        contents.push('\n');
    }
    fs::write(path, contents).with_context(|| format!("Failed to write user list: {:?}", path))?;
    Ok(())
}

/// Format the run summary printed after a report run.
pub fn summary(scanner: &Scanner) -> String {
    let stats = &scanner.stats;
    let mut summary = format!(
        "Scanned {} log files ({}): {} lines, {} session attribute lines",
        stats.files,
        format_size(stats.bytes, BINARY),
        stats.lines,
        stats.matched
    );
    if let Some(span) = scanner.dates.summary() {
        summary.push_str(&format!("\nCoverage: {}", span));
    }
    summary
}
