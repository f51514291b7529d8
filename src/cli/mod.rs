//! Command-line interface wiring for insider-term.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::logging;

pub mod dash;
pub mod health;
pub mod refresh;
pub mod scan;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "S&P 500 insider-selling dashboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command; no sub-command runs the dashboard.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command.unwrap_or_default() {
            Commands::Dash(args) => {
                // The dashboard owns the terminal; logs go to a file.
                logging::init_tracing_to_file(&settings.join_data("insider-term.log"))?;
                dash::run(args, settings).await
            }
            Commands::Scan(args) => {
                logging::init_tracing()?;
                scan::run(args, settings).await
            }
            Commands::Refresh => {
                logging::init_tracing()?;
                refresh::run(settings).await
            }
            Commands::Health => {
                logging::init_tracing()?;
                health::run(settings).await
            }
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive terminal dashboard.
    Dash(dash::Args),
    /// Run one anomaly scan and print the signals.
    Scan(scan::Args),
    /// Trigger a server-side dashboard rebuild.
    Refresh,
    /// Print backend health and provider diagnostics.
    Health,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Dash(dash::Args::default())
    }
}
