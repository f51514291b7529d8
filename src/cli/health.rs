//! CLI entry-point printing backend health and provider diagnostics.

use anyhow::{Context, Result};
use tracing::instrument;

use crate::api::ApiClient;
use crate::config::Settings;

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let client = ApiClient::new(&settings)?;

    let health = client.health().await.context("fetching health")?;
    println!("status: {}", health.status);

    let providers = client.providers().await.context("fetching providers")?;
    println!("{}", serde_json::to_string_pretty(&providers)?);
    Ok(())
}
