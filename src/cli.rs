//! CLI definitions for GSR
//!
//! This module contains the clap CLI structure definitions, separated from
//! main.rs so the completions command can rebuild the full command tree.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "gsr")]
#[command(about = "[ Gateway Session Reporter ] - rebuild VPN session records from gateway logs")]
#[command(
    long_about = "Gateway Session Reporter (GSR) - rebuild VPN session records from gateway logs.

GSR scans a folder of plain-text gateway logs, merges the scattered
'Session Attribute' lines into one record per session, and writes a CSV
report plus a deduplicated user list.

QUICK START:
    gsr report                     Scan ./logs and write ./output
    gsr users                      Print the deduplicated user list
    gsr coverage                   Show the date span the logs cover
    gsr profiles                   List the known line grammars"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for the session report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Tabular CSV with the canonical column header
    Csv,
    /// JSON array of session objects (unset fields omitted)
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the logs and write the session report and user list
    Report {
        /// Logs directory (overrides the configured path)
        #[arg(long)]
        logs: Option<PathBuf>,
        /// Output directory (overrides the configured path)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
        format: ReportFormat,
    },

    /// Print the deduplicated, sorted user list
    Users {
        /// Logs directory (overrides the configured path)
        #[arg(long)]
        logs: Option<PathBuf>,
    },

    /// Print the date span covered by the scanned logs
    Coverage {
        /// Logs directory (overrides the configured path)
        #[arg(long)]
        logs: Option<PathBuf>,
    },

    /// List the known grammar profiles
    Profiles,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open configuration in editor
    Edit,
}
