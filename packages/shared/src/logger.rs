//! Logging setup for the Hiroba binaries.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter directive for the given crates.
///
/// `RUST_LOG` takes precedence over this directive when it is set.
pub fn default_directive(crates: &[&str], default_log_level: &str) -> String {
    crates
        .iter()
        .map(|name| format!("{}={}", name.replace('-', "_"), default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the global tracing subscriber.
///
/// # Arguments
///
/// * `crates` - Crate (or binary) names whose events should be logged at `default_log_level`
/// * `default_log_level` - e.g. "debug", "info", "warn"
///
/// # Examples
///
/// ```no_run
/// use hiroba_shared::logger::setup_logger;
///
/// setup_logger(&["hiroba-server", "tower_http"], "info");
/// ```
pub fn setup_logger(crates: &[&str], default_log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(crates, default_log_level).into());
    let directive = filter.to_string();

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!("Logger initialized with filter '{}'", directive);
}
