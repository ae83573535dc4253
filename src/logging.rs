//! Tracing subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `level` is an [`EnvFilter`] directive such as `info` or
/// `simple_url_shortener=debug,tower_http=info`; `format` is `text` or `json`.
///
/// # Errors
///
/// Returns an error if the directive does not parse or a global subscriber
/// is already installed.
pub fn init(level: &str, format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .with_context(|| format!("Invalid log filter directive '{level}'"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}
