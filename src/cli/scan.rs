//! CLI entry-point for a one-shot anomaly scan.

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::api::{ApiClient, ScanOptions};
use crate::config::Settings;
use crate::ui::format::fmt_count;

/// Args for the `scan` sub-command; ranges match the backend contract.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Baseline window in days (30-730).
    #[arg(long, default_value_t = 365)]
    pub baseline_days: u32,
    /// Current window in days (7-90).
    #[arg(long, default_value_t = 30)]
    pub current_days: u32,
    /// Z-score threshold (1-5).
    #[arg(long, default_value_t = 2.0)]
    pub std_threshold: f64,
    /// Maximum tickers to scan (5-503).
    #[arg(long, default_value_t = 25)]
    pub limit: u32,
    /// Print every signal, not only anomalies.
    #[arg(long)]
    pub all: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    check_range("baseline-days", args.baseline_days as f64, 30.0, 730.0)?;
    check_range("current-days", args.current_days as f64, 7.0, 90.0)?;
    check_range("std-threshold", args.std_threshold, 1.0, 5.0)?;
    check_range("limit", args.limit as f64, 5.0, 503.0)?;

    let client = ApiClient::new(&settings)?;
    let result = client
        .scan(ScanOptions {
            limit: args.limit,
            baseline_days: args.baseline_days,
            current_days: args.current_days,
            std_threshold: args.std_threshold,
        })
        .await
        .context("running scan")?;

    if let Some(error) = &result.error {
        println!("server reported: {error}");
    }
    info!(
        tickers = result.tickers_count,
        records = result.records_count,
        anomalies = result.anomalies_count,
        "scan complete"
    );
    println!(
        "{} tickers, {} records, {} anomalies ({} → {})",
        result.tickers_count,
        result.records_count,
        result.anomalies_count,
        result.date_from,
        result.date_to
    );

    let signals = if args.all {
        &result.all_signals
    } else {
        &result.anomalies
    };
    if signals.is_empty() {
        println!("no signals to display");
        return Ok(());
    }

    println!(
        "{:<8} {:>16} {:>14} {:>13} {:>8}  {}",
        "TICKER", "CURRENT SELLING", "BASELINE MEAN", "BASELINE STD", "Z-SCORE", "STATUS"
    );
    for signal in signals {
        println!(
            "{:<8} {:>16} {:>14.1} {:>13.1} {:>8.2}  {}",
            signal.ticker,
            fmt_count(signal.current_shares_sold),
            signal.baseline_mean,
            signal.baseline_std,
            signal.z_score,
            if signal.is_anomaly { "anomaly" } else { "normal" },
        );
    }
    Ok(())
}

fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    anyhow::ensure!(
        (min..=max).contains(&value),
        "--{name} must be between {min} and {max}"
    );
    Ok(())
}
