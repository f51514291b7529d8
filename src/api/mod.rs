//! HTTP client for the dashboard backend.

pub mod types;

use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::config::Settings;
use types::{DashboardSnapshot, HealthStatus, ScanResult};

/// Errors crossing the HTTP boundary.
///
/// A body-level `error` field on a successful response is not represented
/// here; it travels inside the payload and the caller surfaces it.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{endpoint} returned {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },
}

/// Options for a scan invocation, forwarded as query parameters.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    pub limit: u32,
    pub baseline_days: u32,
    pub current_days: u32,
    pub std_threshold: f64,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            limit: 25,
            baseline_days: 365,
            current_days: 30,
            std_threshold: 2.0,
        }
    }
}

/// Thin wrapper around `reqwest::Client` bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.http_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Fetch one dashboard snapshot, optionally scoped to a sector.
    #[instrument(skip(self))]
    pub async fn dashboard(
        &self,
        sector: Option<&str>,
        limit: usize,
    ) -> Result<DashboardSnapshot, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(sector) = sector.filter(|s| !s.is_empty()) {
            query.push(("sector", sector.to_string()));
        }
        query.push(("limit", limit.to_string()));

        let response = self
            .http
            .get(self.url("/api/dashboard"))
            .query(&query)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: "/api/dashboard",
                status: response.status(),
            });
        }
        let snapshot: DashboardSnapshot = response.json().await?;
        debug!(
            sectors = snapshot.sectors.len(),
            companies = snapshot.total_companies,
            "dashboard fetched"
        );
        Ok(snapshot)
    }

    /// Trigger the server-side rebuild. Fire-and-forget: the server answers
    /// before the rebuild completes.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/api/dashboard/refresh"))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: "/api/dashboard/refresh",
                status: response.status(),
            });
        }
        Ok(())
    }

    /// Run an anomaly scan with the given window parameters.
    #[instrument(skip(self))]
    pub async fn scan(&self, opts: ScanOptions) -> Result<ScanResult, ApiError> {
        let response = self
            .http
            .post(self.url("/api/scan"))
            .query(&[
                ("limit", opts.limit.to_string()),
                ("baseline_days", opts.baseline_days.to_string()),
                ("current_days", opts.current_days.to_string()),
                ("std_threshold", opts.std_threshold.to_string()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: "/api/scan",
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }

    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let response = self.http.get(self.url("/api/health")).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: "/api/health",
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }

    /// Free-form provider diagnostics, shape left to the backend.
    #[instrument(skip(self))]
    pub async fn providers(&self) -> Result<serde_json::Value, ApiError> {
        let response = self
            .http
            .get(self.url("/api/health/providers"))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: "/api/health/providers",
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }
}
