//! # Tracing Setup
//!
//! The state machine emits `tracing` events (target `oncemap_state`); this
//! installs a global `tracing-subscriber` to receive them. Libraries
//! embedding oncemap with their own subscriber should not call it.

use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `config.filter`. Returns `false` if a
/// global subscriber was already installed, in which case nothing changes.
pub fn init_tracing(config: &TelemetryConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter.as_str()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    match result {
        Ok(()) => {
            tracing::debug!(filter = %config.filter, json = config.json, "tracing initialized");
            true
        }
        Err(_) => false,
    }
}
