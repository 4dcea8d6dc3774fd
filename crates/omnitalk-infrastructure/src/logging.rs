//! Logging setup for applications embedding the stores.

use omnitalk_core::OmnitalkError;
use omnitalk_core::error::Result;
use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_directive` (e.g.
/// `"info"` or `"omnitalk_infrastructure=debug"`) is used. Fails if a
/// global subscriber is already set.
pub fn init_logging(default_directive: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| OmnitalkError::config(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| OmnitalkError::internal(format!("Failed to install logger: {}", e)))
}
