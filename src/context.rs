//! Service context bundling all port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::snapshot::{Snapshot, SnapshotError, SnapshotStore};
use crate::ports::invalidation::InvalidationSource;
use crate::ports::logs::LogSource;
use crate::ports::resource_config::ResourceConfigSource;
use crate::ports::tree::TreeSource;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations.
#[derive(Clone)]
pub struct ServiceContext {
    /// Construct tree snapshots.
    pub tree: Arc<dyn TreeSource>,
    /// Per-path resource configuration.
    pub resources: Arc<dyn ResourceConfigSource>,
    /// Simulator logs and error state.
    pub logs: Arc<dyn LogSource>,
    /// Invalidation subscriptions.
    pub invalidation: Arc<dyn InvalidationSource>,
}

impl ServiceContext {
    /// Wires every port to the same snapshot store.
    #[must_use]
    pub fn from_store(store: Arc<SnapshotStore>) -> Self {
        Self {
            tree: store.clone(),
            resources: store.clone(),
            logs: store.clone(),
            invalidation: store,
        }
    }

    /// Creates a context serving the snapshot file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or parsed.
    pub fn open(path: &Path) -> Result<Self, SnapshotError> {
        Ok(Self::from_store(Arc::new(SnapshotStore::open(path)?)))
    }

    /// Creates a context serving an in-memory snapshot.
    #[must_use]
    pub fn in_memory(snapshot: Snapshot) -> Self {
        Self::from_store(Arc::new(SnapshotStore::new(snapshot)))
    }
}
