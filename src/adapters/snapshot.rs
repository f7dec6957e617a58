//! Snapshot adapter: a captured simulator state served through every port.
//!
//! A snapshot document bundles the construct tree, per-path resource
//! configuration, logs and the app error. It is read from JSON or YAML
//! (chosen by file extension) and can be reloaded, which publishes
//! invalidation tokens for every query.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::channel::ChannelInvalidation;
use crate::logs::LogEntry;
use crate::ports::invalidation::{InvalidationSource, QueryName};
use crate::ports::logs::LogSource;
use crate::ports::resource_config::{ConfigLookupError, ResourceConfig, ResourceConfigSource};
use crate::ports::tree::TreeSource;
use crate::tree::ConstructNode;

/// Captured simulator state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    /// The construct tree.
    pub tree: ConstructNode,
    /// Resource configuration keyed by construct path.
    #[serde(default)]
    pub resources: IndexMap<String, ResourceConfig>,
    /// Log entries, oldest first.
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    /// App error message, if the app failed to start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Snapshot {
    /// Snapshot holding only `tree`.
    #[must_use]
    pub fn from_tree(tree: ConstructNode) -> Self {
        Self { tree, resources: IndexMap::new(), logs: Vec::new(), error: None }
    }

    /// Parses a snapshot document; `.yaml`/`.yml` is YAML, anything else JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the contents do not parse.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, SnapshotError> {
        let is_yaml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        if is_yaml {
            serde_yaml::from_str(contents)
                .map_err(|source| SnapshotError::Yaml { path: path.to_path_buf(), source })
        } else {
            serde_json::from_str(contents)
                .map_err(|source| SnapshotError::Json { path: path.to_path_buf(), source })
        }
    }

    /// Reads and parses the snapshot at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| SnapshotError::Io { path: path.to_path_buf(), source })?;
        Self::parse(&contents, path)
    }
}

/// Failure to load a snapshot document.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The file could not be read.
    #[error("failed to read snapshot {}: {source}", path.display())]
    Io {
        /// Snapshot file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid JSON snapshot.
    #[error("failed to parse snapshot {}: {source}", path.display())]
    Json {
        /// Snapshot file.
        path: PathBuf,
        /// Parser failure.
        #[source]
        source: serde_json::Error,
    },
    /// The file is not a valid YAML snapshot.
    #[error("failed to parse snapshot {}: {source}", path.display())]
    Yaml {
        /// Snapshot file.
        path: PathBuf,
        /// Parser failure.
        #[source]
        source: serde_yaml::Error,
    },
    /// `reload` was called on a store that was not loaded from a file.
    #[error("snapshot store has no backing file")]
    NoBackingFile,
}

/// Serves the current snapshot through the tree, resource, log and
/// invalidation ports.
///
/// Each port call reads the snapshot that is current at that moment, so a
/// query that fetches the tree once sees one consistent state.
pub struct SnapshotStore {
    file: Option<PathBuf>,
    current: RwLock<Arc<Snapshot>>,
    invalidation: ChannelInvalidation,
}

impl SnapshotStore {
    /// Store serving an in-memory snapshot.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            file: None,
            current: RwLock::new(Arc::new(snapshot)),
            invalidation: ChannelInvalidation::default(),
        }
    }

    /// Store backed by the snapshot file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn open(path: &Path) -> Result<Self, SnapshotError> {
        let snapshot = Snapshot::load(path)?;
        tracing::debug!(path = %path.display(), resources = snapshot.resources.len(), "loaded snapshot");
        Ok(Self { file: Some(path.to_path_buf()), ..Self::new(snapshot) })
    }

    /// The snapshot currently being served.
    #[must_use]
    pub fn current(&self) -> Arc<Snapshot> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Swaps in `snapshot` and invalidates every query.
    pub fn replace(&self, snapshot: Snapshot) {
        {
            let mut guard = match self.current.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            *guard = Arc::new(snapshot);
        }
        self.invalidation.publish_all(&QueryName::ALL);
    }

    /// Re-reads the backing file and invalidates every query.
    ///
    /// # Errors
    ///
    /// Returns an error if the store has no backing file, or the file
    /// cannot be read or parsed. The current snapshot is kept on error.
    pub fn reload(&self) -> Result<(), SnapshotError> {
        let path = self.file.as_deref().ok_or(SnapshotError::NoBackingFile)?;
        let snapshot = Snapshot::load(path)?;
        self.replace(snapshot);
        Ok(())
    }
}

impl TreeSource for SnapshotStore {
    fn tree(&self) -> Result<ConstructNode, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.current().tree.clone())
    }
}

impl ResourceConfigSource for SnapshotStore {
    fn resource_config(&self, path: &str) -> Result<ResourceConfig, ConfigLookupError> {
        self.current()
            .resources
            .get(path)
            .cloned()
            .ok_or_else(|| ConfigLookupError::NotFound { path: path.to_owned() })
    }
}

impl LogSource for SnapshotStore {
    fn logs(&self) -> Result<Vec<LogEntry>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.current().logs.clone())
    }

    fn error_message(&self) -> Option<String> {
        self.current().error.clone()
    }
}

impl InvalidationSource for SnapshotStore {
    fn subscribe(&self) -> broadcast::Receiver<QueryName> {
        self.invalidation.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON_SNAPSHOT: &str = r#"{
        "tree": {
            "id": "root",
            "path": "root",
            "children": {
                "Bucket": {"id": "Bucket", "path": "root/Bucket"}
            }
        },
        "resources": {
            "root/Bucket": {"type": "@winglang/sdk.cloud.Bucket", "props": {"public": false}}
        },
        "logs": [
            {"timestamp": 1, "level": "info", "message": "started"}
        ]
    }"#;

    const YAML_SNAPSHOT: &str = "
tree:
  id: root
  path: root
error: compilation failed
";

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("construct_lens_snapshot_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn parses_json_by_default() {
        let snapshot = Snapshot::parse(JSON_SNAPSHOT, Path::new("state.json")).unwrap();
        assert_eq!(snapshot.tree.path, "root");
        assert_eq!(snapshot.resources["root/Bucket"].resource_type, "@winglang/sdk.cloud.Bucket");
        assert_eq!(snapshot.logs.len(), 1);
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn parses_yaml_by_extension() {
        let snapshot = Snapshot::parse(YAML_SNAPSHOT, Path::new("state.YML")).unwrap();
        assert_eq!(snapshot.error.as_deref(), Some("compilation failed"));
        assert!(snapshot.resources.is_empty());
    }

    #[test]
    fn parse_error_names_the_file() {
        let err = Snapshot::parse("{", Path::new("broken.json")).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn missing_resource_is_not_found() {
        let store = SnapshotStore::new(Snapshot::parse(JSON_SNAPSHOT, Path::new("s.json")).unwrap());
        assert!(store.resource_config("root/Bucket").is_ok());
        assert!(matches!(
            store.resource_config("root"),
            Err(ConfigLookupError::NotFound { path }) if path == "root"
        ));
    }

    #[test]
    fn in_memory_store_cannot_reload() {
        let store = SnapshotStore::new(Snapshot::from_tree(
            serde_json::from_str(r#"{"id": "root", "path": "root"}"#).unwrap(),
        ));
        assert!(matches!(store.reload(), Err(SnapshotError::NoBackingFile)));
    }

    #[tokio::test]
    async fn reload_swaps_snapshot_and_invalidates() {
        let path = temp_file("reload.json", JSON_SNAPSHOT);
        let store = SnapshotStore::open(&path).unwrap();
        let mut rx = store.subscribe();
        assert_eq!(store.logs().unwrap().len(), 1);

        std::fs::write(
            &path,
            r#"{"tree": {"id": "root", "path": "root"}, "error": "boom"}"#,
        )
        .unwrap();
        store.reload().unwrap();

        assert_eq!(store.error_message().as_deref(), Some("boom"));
        assert!(store.logs().unwrap().is_empty());
        assert!(store.tree().unwrap().children.is_none());
        assert_eq!(rx.recv().await.unwrap(), QueryName::Logs);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn failed_reload_keeps_current_snapshot() {
        let path = temp_file("keep.json", JSON_SNAPSHOT);
        let store = SnapshotStore::open(&path).unwrap();
        std::fs::write(&path, "not json").unwrap();

        assert!(store.reload().is_err());
        assert_eq!(store.logs().unwrap().len(), 1);

        let _ = std::fs::remove_file(&path);
    }
}
