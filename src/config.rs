//! Runtime configuration utilities for insider-term.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base URL of the dashboard backend API.
    pub api_base_url: String,
    /// Companies requested per dashboard fetch.
    pub page_limit: usize,
    /// Root folder for local artefacts (TUI log file lives here).
    pub data_dir: PathBuf,
    /// Per-request HTTP timeout in seconds.
    pub http_timeout_secs: u64,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let api_base_url = env::var("INSIDER_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
        let page_limit = env::var("INSIDER_PAGE_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50);
        let data_dir = env::var("INSIDER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let http_timeout_secs = env::var("INSIDER_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        std::fs::create_dir_all(&data_dir).context("creating data dir")?;

        Ok(Self {
            api_base_url,
            page_limit,
            data_dir,
            http_timeout_secs,
        })
    }

    /// Convenience helper for derived path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8080".to_string(),
            page_limit: 50,
            data_dir: PathBuf::from("./data"),
            http_timeout_secs: 30,
        }
    }
}
