//! Tracing setup: subscriber initialization and span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable read by [`init_tracing`].
pub const LOG_ENV_VAR: &str = "CAUSA_LOG";

/// Directive used when [`LOG_ENV_VAR`] is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "causa=info";

static INIT: Once = Once::new();

/// Output format of the installed `fmt` layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines with thread ids and source locations.
    Text,
    /// One JSON object per event, for log shippers.
    Json,
}

/// Initialize the Causa tracing subscriber with text output.
///
/// Reads `CAUSA_LOG` for filtering, e.g. `CAUSA_LOG=causa_analysis=debug`.
/// Falls back to `causa=info`.
///
/// Idempotent: later calls are no-ops.
pub fn init_tracing() {
    install(filter_from_env(), LogFormat::Text);
}

/// Initialize tracing with JSON output and an explicit filter directive,
/// for embedding in a service or for tests. An unparsable directive falls
/// back to `causa=info`.
pub fn init_tracing_with_filter(directives: &str) {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter, LogFormat::Json);
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install one registry with `filter` and a single `fmt` layer in `format`.
/// A subscriber set elsewhere in the process is left in place.
fn install(filter: EnvFilter, format: LogFormat) {
    INIT.call_once(|| {
        let text = (format == LogFormat::Text).then(|| {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
        });
        let json = (format == LogFormat::Json).then(|| fmt::layer().json().with_target(true));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(text)
            .with(json)
            .try_init();
    });
}
