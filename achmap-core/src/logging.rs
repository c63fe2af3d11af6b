//! Diagnostic output setup
//!
//! All diagnostics go to stderr so stdout only ever carries the JSON table.

use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_LEVEL;

/// Translate a user supplied level name into a tracing filter directive.
///
/// Accepts the usual tracing names plus `warning`, `fatal` and `panic`.
/// Returns `None` for anything unrecognised.
pub fn level_directive(level: &str) -> Option<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" | "fatal" | "panic" => Some("error"),
        "off" => Some("off"),
        _ => None,
    }
}

/// Initialize tracing on stderr; an unknown level keeps the default.
pub fn init_tracing(level: &str) {
    let directive = level_directive(level).unwrap_or(DEFAULT_LOG_LEVEL);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .init();

    if level_directive(level).is_none() {
        tracing::warn!("Unknown log level '{}', using '{}'", level, DEFAULT_LOG_LEVEL);
    }
}
