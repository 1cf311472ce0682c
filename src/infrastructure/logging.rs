//! Logging setup.
//!
//! Filter priority: `HEDGEHOG_LOG`, then `RUST_LOG`, then the default
//! (`info`, or `debug` with `--verbose`). Logs go to stderr so reports on
//! stdout stay machine-readable.

use std::env;

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, EnvFilter};

fn create_filter(verbose: bool) -> Result<EnvFilter> {
    if let Ok(directives) = env::var("HEDGEHOG_LOG") {
        return Ok(EnvFilter::try_new(directives)?);
    }
    if env::var("RUST_LOG").is_ok() {
        return Ok(EnvFilter::try_from_default_env()?);
    }
    let level = if verbose { "debug" } else { "info" };
    Ok(EnvFilter::try_new(format!("warn,hedgehog_equiv={level}"))?)
}

/// Install the global subscriber.
pub fn init(verbose: bool) -> Result<()> {
    fmt()
        .with_env_filter(create_filter(verbose)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

/// Logging for tests. Safe to call repeatedly.
pub fn test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("hedgehog_equiv=trace"))
        .with_test_writer()
        .try_init();
}
