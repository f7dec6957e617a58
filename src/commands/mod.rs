//! Command dispatch and handlers.

pub mod logs;
pub mod node;
pub mod tree;

use serde::Serialize;

use crate::cli::Command;
use crate::config::LensConfig;
use crate::context::ServiceContext;
use crate::error::QueryError;
use crate::queries::Console;

/// Opens the configured snapshot and dispatches `command` to its handler.
///
/// # Errors
///
/// Returns an error string if snapshot loading or the selected query fails.
/// Query failures are rendered as a JSON error report.
pub fn dispatch(command: &Command, config: &LensConfig) -> Result<(), String> {
    let ctx = ServiceContext::open(&config.snapshot).map_err(|e| e.to_string())?;
    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected query fails.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    let console = Console::new(ctx);
    match command {
        Command::Explorer => tree::explorer(&console),
        Command::Map => tree::map(&console),
        Command::Children { path } => node::children(&console, path.as_deref()),
        Command::Breadcrumbs { path } => node::breadcrumbs(&console, path.as_deref()),
        Command::Node { path } => node::detail(&console, path),
        Command::Metadata { path } => node::metadata(&console, path),
        Command::Logs { levels, since, text } => {
            logs::logs(&console, levels, since.as_deref(), text)
        }
        Command::Error => logs::error(&console),
    }
}

/// Pretty-prints `value` as JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("failed to serialize output: {e}"))?;
    println!("{json}");
    Ok(())
}

/// Renders a query failure as its JSON error report.
fn report(err: &QueryError) -> String {
    serde_json::to_string(&err.report()).unwrap_or_else(|_| err.to_string())
}

/// Prints the query result, or returns its error report.
fn emit<T: Serialize>(result: Result<T, QueryError>) -> Result<(), String> {
    match result {
        Ok(value) => print_json(&value),
        Err(err) => {
            tracing::debug!(error = %err, "query failed");
            Err(report(&err))
        }
    }
}
