//! Tree port for reading the current construct tree.

use crate::tree::ConstructNode;

/// Provides snapshots of the simulator's construct tree.
///
/// Every call returns an independent snapshot; queries never share one.
pub trait TreeSource: Send + Sync {
    /// Returns the current construct tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the simulator cannot produce a tree.
    fn tree(&self) -> Result<ConstructNode, Box<dyn std::error::Error + Send + Sync>>;
}
