//! Tracing setup for the example runner.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding filter directives, e.g. `oxide_apps=debug`.
pub const LOG_ENV: &str = "OXIDE_APPS_LOG";

/// Initialize tracing on stderr.
///
/// Stdout carries rendered markup, so log lines never go there. Directives
/// come from `OXIDE_APPS_LOG` when set and valid, otherwise from `fallback`.
pub fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
