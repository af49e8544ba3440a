//! Log subscriber setup.
//!
//! Logs go to stderr so they never interleave with narration on stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// The default filter for a verbosity count (`-v` flags).
#[must_use]
pub const fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides `verbosity`.
///
/// Calling this twice is harmless; the second call does nothing.
pub fn init(verbosity: u8) {
    let installed = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbosity).into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();

    if installed.is_ok() {
        tracing::debug!(verbosity, "logging initialized");
    }
}
