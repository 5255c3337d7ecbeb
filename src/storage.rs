//! Input discovery and output bootstrapping.
//!
//! Finds the log files to scan and prepares the output directory. The
//! missing-logs-directory guard (create it, tell the operator, fail the
//! run) lives in the command layer; this module only reports what exists.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;

/// Locates inputs and outputs based on the active configuration
pub struct StorageManager {
    config: Config,
}

impl StorageManager {
    /// Create a new storage manager with the given config
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The directory scanned for log files
    pub fn logs_dir(&self) -> PathBuf {
        self.config.logs_directory()
    }

    /// The directory report files are written to
    pub fn output_dir(&self) -> PathBuf {
        self.config.output_directory()
    }

    /// Create the logs directory if it does not exist yet
    pub fn create_logs_dir(&self) -> Result<PathBuf> {
        let dir = self.logs_dir();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create logs directory: {:?}", dir))?;
        Ok(dir)
    }

    /// Ensure the output directory exists
    pub fn ensure_output_dir(&self) -> Result<PathBuf> {
        let dir = self.output_dir();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory: {:?}", dir))?;
        Ok(dir)
    }

    /// List the log files to scan, sorted by path.
    ///
    /// Only regular files with the configured extension are picked up;
    /// sorting keeps the scan order (and the report's record order)
    /// stable across runs.
    pub fn list_log_files(&self) -> Result<Vec<PathBuf>> {
        let dir = self.logs_dir();
        let entries = fs::read_dir(&dir)
            .with_context(|| format!("Failed to read logs directory: {:?}", dir))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to read entry in logs directory: {:?}", dir))?;
            let path = entry.path();
            let matches_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext == self.config.scan.extension)
                .unwrap_or(false);
            if path.is_file() && matches_extension {
                files.push(path);
            }
        }

        files.sort();
        debug!("found {} log files in {}", files.len(), dir.display());
        Ok(files)
    }
}
