//! Per-node commands: `children`, `breadcrumbs`, `node`, `metadata`.

use super::emit;
use crate::queries::Console;

/// Execute the `children` command.
///
/// # Errors
///
/// Returns the JSON error report if the query fails.
pub fn children(console: &Console<'_>, path: Option<&str>) -> Result<(), String> {
    emit(console.child_relationships(path))
}

/// Execute the `breadcrumbs` command.
///
/// # Errors
///
/// Returns the JSON error report if the query fails.
pub fn breadcrumbs(console: &Console<'_>, path: Option<&str>) -> Result<(), String> {
    emit(console.breadcrumbs(path))
}

/// Execute the `node` command.
///
/// # Errors
///
/// Returns the JSON error report if the node does not exist or the query fails.
pub fn detail(console: &Console<'_>, path: &str) -> Result<(), String> {
    emit(console.node_detail(Some(path)))
}

/// Execute the `metadata` command.
///
/// # Errors
///
/// Returns the JSON error report if the node does not exist or the query fails.
pub fn metadata(console: &Console<'_>, path: &str) -> Result<(), String> {
    emit(console.node_metadata(Some(path)))
}
