//! Entry point wiring CLI dispatch to the dashboard client.

use anyhow::Result;
use insider_term::{cli::Cli, config::Settings};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;
    let cli = Cli::parse();

    cli.dispatch(settings).await
}
