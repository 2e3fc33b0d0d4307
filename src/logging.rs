//! Logging utilities
//!
//! The adapter only emits `tracing` events; installing a subscriber is left
//! to the embedding application. [`init_tracing`] is a convenience for
//! binaries and examples that have no subscriber of their own.

use crate::config::Settings;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Build the event filter, letting `RUST_LOG` override the given level
pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Install a global tracing subscriber writing to stderr.
///
/// Uses JSON lines when `json` is set. Returns an error instead of panicking
/// if a global subscriber is already installed.
pub fn init_tracing(
    log_level: &str,
    json: bool,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let layer = if json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(env_filter(log_level))
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(env_filter(log_level))
            .boxed()
    };

    tracing_subscriber::registry().with(layer).try_init()
}

/// Install a global tracing subscriber at the level configured by `LOG_LEVEL`
pub fn init_tracing_from(
    settings: &Settings,
    json: bool,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    init_tracing(&settings.log_level, json)
}
