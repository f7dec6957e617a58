//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a stderr subscriber filtered by `directive`.
///
/// Stdout carries query results, so diagnostics never go there. Calling
/// this more than once keeps the first subscriber.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).with_ansi(false).try_init();
}
