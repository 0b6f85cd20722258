//! Span tracing for the search entry points.
//!
//! Enable with `--features instrumentation`. `RUST_LOG` selects which spans
//! are printed; with it unset the subscriber stays silent.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Installs a global subscriber that reports the duration of every
/// instrumented search call when it closes.
///
/// Returns an error if another global subscriber was already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new("off"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .compact()
        .try_init()
}
