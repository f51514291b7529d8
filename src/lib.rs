//! Terminal dashboard client for the S&P 500 insider-selling backend.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod state;
pub mod ui;
