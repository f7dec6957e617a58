//! `construct-lens logs` and `construct-lens error` commands.

use chrono::DateTime;

use super::{emit, print_json};
use crate::logs::{LevelFilter, LogFilter, LogLevel};
use crate::queries::Console;

/// Execute the `logs` command.
///
/// # Errors
///
/// Returns an error if `since` is not a valid time or the query fails.
pub fn logs(
    console: &Console<'_>,
    levels: &[LogLevel],
    since: Option<&str>,
    text: &str,
) -> Result<(), String> {
    let filter = LogFilter {
        level: if levels.is_empty() { LevelFilter::default() } else { LevelFilter::only(levels) },
        timestamp: since.map(parse_since).transpose()?.unwrap_or(0),
        text: text.to_owned(),
    };
    emit(console.logs(&filter))
}

/// Execute the `error` command.
///
/// # Errors
///
/// Returns an error if the output cannot be serialized.
pub fn error(console: &Console<'_>) -> Result<(), String> {
    print_json(&console.error_message())
}

/// Parses an RFC 3339 time or epoch milliseconds into epoch milliseconds.
fn parse_since(value: &str) -> Result<i64, String> {
    if let Ok(millis) = value.parse::<i64>() {
        return Ok(millis);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|time| time.timestamp_millis())
        .map_err(|e| format!("invalid --since value {value:?}: {e}"))
}
