//! Global subscriber setup driven by [`ObservabilityConfig`].

pub mod spans;

use ras_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins, otherwise the configured level.
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed (e.g. by the host
/// application or an earlier call); the existing one stays in place.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true);
    let result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.is_ok()
}
