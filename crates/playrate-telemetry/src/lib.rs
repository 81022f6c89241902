//! Tracing setup shared by the playrate binaries.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Configuration for log output.
#[derive(Clone, Debug)]
pub struct TelemetryConfig {
    /// Default log level. Overridden by the RUST_LOG env var.
    pub log_level: Level,
    /// Per-module level overrides (e.g. "playrate_engine" => DEBUG).
    pub module_levels: Vec<(String, Level)>,
    /// Emit records as JSON lines instead of human-readable text.
    pub json_output: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            module_levels: Vec::new(),
            json_output: false,
        }
    }
}

/// Initialize the tracing subscriber. Call once at startup.
pub fn init_telemetry(config: &TelemetryConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config)));

    if config.json_output {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_filter(env_filter);
        tracing_subscriber::registry().with(fmt_layer).init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_filter(env_filter);
        tracing_subscriber::registry().with(fmt_layer).init();
    }
}

/// Build the env-filter directive string from config.
fn filter_directives(config: &TelemetryConfig) -> String {
    let mut directives = config.log_level.to_string().to_lowercase();
    for (module, level) in &config.module_levels {
        directives.push_str(&format!(",{}={}", module, level.to_string().to_lowercase()));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_plain_info() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.module_levels.is_empty());
        assert!(!config.json_output);
    }

    #[test]
    fn directives_carry_the_base_level() {
        let config = TelemetryConfig {
            log_level: Level::WARN,
            ..Default::default()
        };
        assert_eq!(filter_directives(&config), "warn");
    }

    #[test]
    fn directives_append_module_overrides() {
        let config = TelemetryConfig {
            log_level: Level::INFO,
            module_levels: vec![
                ("playrate_engine".to_string(), Level::DEBUG),
                ("playrate_bridge".to_string(), Level::TRACE),
            ],
            json_output: false,
        };
        assert_eq!(
            filter_directives(&config),
            "info,playrate_engine=debug,playrate_bridge=trace"
        );
    }
}
