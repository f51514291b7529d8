//! Structured logging bootstrap using `tracing`.

use std::{fs::File, path::Path, sync::Arc};

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a global tracing subscriber writing to stderr.
///
/// Used by the one-shot CLI subcommands where terminal output is fine.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(fmt_layer).init();
    Ok(())
}

/// Install a global tracing subscriber writing to a log file.
///
/// The dashboard owns the alternate screen, so nothing may print to the
/// terminal while it runs.
pub fn init_tracing_to_file(path: &Path) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_level(true)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .with_filter(env_filter);

    tracing_subscriber::registry().with(fmt_layer).init();
    Ok(())
}
