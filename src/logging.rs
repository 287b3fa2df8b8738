//! Tracing subscriber setup

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a filter directive
pub const LOG_ENV: &str = "COIN_TRACKER_LOG";

const DEFAULT_DIRECTIVE: &str = "coin_tracker=warn";

static TRACING_INIT: Once = Once::new();

/// Pick the filter directive to use
///
/// An explicit directive (`--log` or `COIN_TRACKER_LOG`) wins, then
/// `--verbose`, then the configured level.
pub fn resolve_directive(explicit: Option<&str>, verbose: bool, configured: Option<&str>) -> String {
    let non_empty = |s: &&str| !s.trim().is_empty();
    if let Some(explicit) = explicit.filter(non_empty) {
        return explicit.to_string();
    }
    if verbose {
        return "coin_tracker=debug".to_string();
    }
    configured
        .filter(non_empty)
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

/// Initialize the global subscriber, writing to stderr
///
/// Only the first call has any effect. An unparseable directive falls back
/// to the default.
pub fn init_tracing(explicit: Option<&str>, verbose: bool, configured: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let directive = resolve_directive(explicit, verbose, configured);
        let filter =
            EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
