//! Configuration management for GSR

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::scanner::Profile;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Input/output locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the raw log files
    #[serde(default = "default_logs_dir")]
    pub logs_dir: String,
    /// Directory the report files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_logs_dir() -> String {
    "./logs".to_string()
}

fn default_output_dir() -> String {
    "./output".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            logs_dir: default_logs_dir(),
            output_dir: default_output_dir(),
        }
    }
}

/// Scanning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Grammar profiles to try, by name ("syslog", "bare-time")
    #[serde(default = "default_profiles")]
    pub profiles: Vec<String>,
    /// File extension of the log files to pick up
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Explicit reference year for date-range tracking. Log lines carry no
    /// year; setting this (e.g. to a leap year) admits Feb 29.
    #[serde(default)]
    pub year: Option<i32>,
}

fn default_profiles() -> Vec<String> {
    Profile::ALL.iter().map(|p| p.name().to_string()).collect()
}

fn default_extension() -> String {
    "txt".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            profiles: default_profiles(),
            extension: default_extension(),
            year: None,
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_csv_filename")]
    pub csv_filename: String,
    #[serde(default = "default_users_filename")]
    pub users_filename: String,
}

fn default_csv_filename() -> String {
    "session_report.csv".to_string()
}

fn default_users_filename() -> String {
    "users.txt".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            csv_filename: default_csv_filename(),
            users_filename: default_users_filename(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/gsr/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join("config.toml"))
    }

    /// Get the config directory path (~/.config/gsr)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("gsr"))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Logs directory with a leading `~/` expanded
    pub fn logs_directory(&self) -> PathBuf {
        expand_tilde(&self.paths.logs_dir)
    }

    /// Output directory with a leading `~/` expanded
    pub fn output_directory(&self) -> PathBuf {
        expand_tilde(&self.paths.output_dir)
    }

    /// Resolve the configured profile names to grammar profiles.
    ///
    /// Unknown names are skipped with a warning; duplicates are dropped.
    pub fn enabled_profiles(&self) -> Vec<Profile> {
        let mut profiles = Vec::new();
        for name in &self.scan.profiles {
            match Profile::from_name(name) {
                Some(profile) if !profiles.contains(&profile) => profiles.push(profile),
                Some(_) => {}
                None => tracing::warn!("unknown grammar profile '{}' in config, skipping", name),
            }
        }
        profiles
    }
}

/// Expand a leading `~/` to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
