//! Diagnostic logging.
//!
//! Library code emits `tracing` events; this module installs the subscriber
//! for the binary. Output goes to stderr so stdout stays free for the
//! command's own lines and tables. The filter is read from `SPOTMOOD_LOG`
//! (e.g. `SPOTMOOD_LOG=spotmood=debug`) and defaults to warnings only.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "SPOTMOOD_LOG";
pub const DEFAULT_FILTER: &str = "spotmood=warn";

pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init() {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(fmt_layer)
        .try_init();
}
