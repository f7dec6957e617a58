//! `construct-lens explorer` and `construct-lens map` commands.

use super::emit;
use crate::queries::Console;

/// Execute the `explorer` command.
///
/// # Errors
///
/// Returns the JSON error report if the query fails.
pub fn explorer(console: &Console<'_>) -> Result<(), String> {
    emit(console.explorer_tree())
}

/// Execute the `map` command.
///
/// # Errors
///
/// Returns the JSON error report if the query fails.
pub fn map(console: &Console<'_>) -> Result<(), String> {
    emit(console.map())
}
