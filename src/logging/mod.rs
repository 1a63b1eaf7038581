//! Tracing setup shared by the worker and the API server.
//!
//! `APP_ENV` picks the output format. `production`/`prod` emits one JSON
//! object per line with file and line, carrying the per-cycle fields
//! (`current`, `previous`, `close`, `as_of`) as keys. Anything else, including
//! the default `sandbox`, gets ANSI-coloured text for a terminal.

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging based on the environment
///
/// Filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if is_production(&get_environment()) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stdout),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .init();
    }
}

/// Whether `APP_ENV` selects JSON output.
pub fn is_production(env: &str) -> bool {
    matches!(env, "production" | "prod")
}
