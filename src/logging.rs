//! Tracing subscriber setup for the command-line host.
//!
//! Logs go to stderr so that stdout carries only block output.

use crate::config::LoggingConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Maps `-v` occurrences to a filter directive.
///
/// With no flag the configured level applies.
pub fn level_for(verbosity: u8, configured: &str) -> String {
    match verbosity {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Initialize logging based on verbosity level and configuration.
///
/// `RUST_LOG` takes precedence over both. Calling this more than once is a
/// no-op.
pub fn init_logging(verbosity: u8, config: &LoggingConfig) {
    let filter = level_for(verbosity, &config.level);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter));

    let json = config.format.eq_ignore_ascii_case("json");
    let text_layer = (!json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(verbosity >= 3)
    });
    let json_layer = json.then(|| fmt::layer().json().with_writer(std::io::stderr));

    let _ = tracing_subscriber::registry()
        .with(text_layer)
        .with(json_layer)
        .with(env_filter)
        .try_init();
}
