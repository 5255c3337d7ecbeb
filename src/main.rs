//! Gateway Session Reporter (GSR) - CLI entry point

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { logs, output, format } => commands::report::handle(logs, output, format),
        Commands::Users { logs } => commands::users::handle(logs),
        Commands::Coverage { logs } => commands::coverage::handle(logs),
        Commands::Profiles => commands::profiles::handle(),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::show(),
            ConfigCommands::Edit => commands::config::edit(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
