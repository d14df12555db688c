//! Structured logging for the Ridge terrain generator.
//!
//! Sets up span-based, filterable logging via the `tracing` ecosystem:
//! console output with timestamps and module paths, environment-based
//! filtering through `RUST_LOG`, and a config-driven log level fallback.

use ridge_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// The filter resolves in priority order: `RUST_LOG` environment variable,
/// then the config's `debug.log_level`, then `"info"`.
///
/// # Examples
///
/// ```no_run
/// use ridge_config::Config;
/// use ridge_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(&config));
/// ```
pub fn init_logging(config: Option<&Config>) {
    let filter_str = config
        .map(|config| config.debug.log_level.as_str())
        .filter(|level| !level.is_empty())
        .unwrap_or("info")
        .to_string();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    // Console layer: human-readable format with time since process start.
    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// Create an `EnvFilter` with the default filter string (`info`).
///
/// Useful for tests that need consistent default behavior.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_info() {
        let filter = default_env_filter();
        assert!(format!("{}", filter).contains("info"));
    }

    #[test]
    fn test_env_filter_parsing() {
        // Filter strings the generator is expected to see must parse.
        let valid_filters = [
            "info",
            "debug,ridge_terrain=trace",
            "warn,ridge_mesh=debug",
            "error",
        ];

        for filter_str in &valid_filters {
            let result = EnvFilter::try_new(*filter_str);
            assert!(result.is_ok(), "Failed to parse filter: {}", filter_str);
        }
    }

    #[test]
    fn test_config_log_level_is_usable_as_filter() {
        let config = ridge_config::Config::default();
        let result = EnvFilter::try_new(&config.debug.log_level);
        assert!(
            result.is_ok(),
            "default config log level {:?} should be a valid filter",
            config.debug.log_level
        );
    }
}
