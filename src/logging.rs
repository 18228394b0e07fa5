use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "warn";

/// Filter for a `--log-level` value. An empty or missing value defers to
/// `RUST_LOG`; anything unparsable falls back to `warn`.
pub fn filter_for(level: Option<&str>) -> EnvFilter {
    let directive = match level.filter(|l| !l.is_empty()) {
        Some(l) => l.to_string(),
        None => std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default(),
    };
    if directive.is_empty() {
        return EnvFilter::new(DEFAULT_DIRECTIVE);
    }
    EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("warning: ignoring log level '{}': {}", directive, e);
        EnvFilter::new(DEFAULT_DIRECTIVE)
    })
}

/// Route tracing events to stderr, leaving stdout to the report. Later
/// calls are no-ops once a global subscriber exists.
pub fn init_with_level(level: Option<&str>) {
    let events = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();
    let _ = tracing_subscriber::registry()
        .with(events)
        .with(filter_for(level))
        .try_init();
}
