//! CLI entry-point triggering a server-side dashboard rebuild.

use anyhow::{Context, Result};
use tracing::instrument;

use crate::api::ApiClient;
use crate::config::Settings;

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let client = ApiClient::new(&settings)?;
    client.refresh().await.context("triggering refresh")?;
    println!("dashboard refresh triggered; data is fresh within 2-3 minutes");
    Ok(())
}
