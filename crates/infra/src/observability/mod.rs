//! Logging bootstrap
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` takes precedence
//! over the configured level.

use rfshop_domain::{LoggingConfig, Result, ShopError};
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` if set and valid, else the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber, as plain text or JSON lines.
///
/// # Errors
/// Returns `ShopError::Internal` if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config)).with_target(true);

    let installed = if config.json {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| ShopError::internal(format!("failed to install logger: {e}")))
}
