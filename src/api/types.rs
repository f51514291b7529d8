//! Typed mirrors of the backend JSON contract.
//!
//! Every field the server may omit or null out is an explicit `Option`;
//! read sites handle absence rather than relying on defaults.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One company within a sector. Immutable once received; keyed by symbol.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Company {
    pub symbol: String,
    pub name: String,
    pub price: Option<f64>,
    pub change_pct: Option<f64>,
    pub quarter_trend: Option<f64>,
    pub quarter_closes: Option<Vec<f64>>,
    pub news: Option<Vec<NewsItem>>,
    pub top_insiders: Option<Vec<Insider>>,
    /// Data-source label (e.g. "price") to provider name.
    #[serde(default)]
    pub sources: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Insider {
    pub name: String,
    pub role: Option<String>,
    pub shares: f64,
    pub value: Option<f64>,
}

/// Named sector and its companies. Sectors partition the company set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Sector {
    pub name: String,
    pub companies: Vec<Company>,
}

/// One complete dashboard payload, replaced wholesale per fetch.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub as_of: String,
    #[serde(default)]
    pub total_companies: usize,
    #[serde(default)]
    pub sectors: Vec<Sector>,
    /// Superset of sector names across all pages, drives the filter UI.
    #[serde(default)]
    pub available_sectors: Vec<String>,
    pub provider_status: Option<HashMap<String, String>>,
    /// Application-level error reported despite HTTP success.
    pub error: Option<String>,
}

impl DashboardSnapshot {
    /// Flatten all companies across sectors in display order.
    pub fn all_companies(&self) -> impl Iterator<Item = &Company> {
        self.sectors.iter().flat_map(|s| s.companies.iter())
    }

    /// Resolve a symbol against the snapshot; absent symbols yield `None`.
    pub fn company(&self, symbol: &str) -> Option<&Company> {
        self.all_companies().find(|c| c.symbol == symbol)
    }
}

/// One ticker's computed anomaly statistics for a scan run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanSignal {
    pub ticker: String,
    pub current_shares_sold: f64,
    pub baseline_mean: f64,
    pub baseline_std: f64,
    pub z_score: f64,
    pub is_anomaly: bool,
}

/// Parameters echoed back by the scan endpoint.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct ScanParams {
    pub baseline_days: u32,
    pub current_days: u32,
    pub std_threshold: f64,
}

/// One complete scan payload, replaced wholesale per invocation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScanResult {
    #[serde(default)]
    pub tickers_count: usize,
    #[serde(default)]
    pub records_count: usize,
    #[serde(default)]
    pub anomalies_count: usize,
    #[serde(default)]
    pub date_from: String,
    #[serde(default)]
    pub date_to: String,
    #[serde(default)]
    pub as_of: String,
    #[serde(default)]
    pub params: ScanParams,
    #[serde(default)]
    pub anomalies: Vec<ScanSignal>,
    #[serde(default)]
    pub all_signals: Vec<ScanSignal>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
}
