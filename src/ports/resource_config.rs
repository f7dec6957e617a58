//! Resource configuration port for per-path simulator metadata.

use serde::{Deserialize, Serialize};

/// Simulator-side configuration of one resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceConfig {
    /// Resource type, e.g. `"@winglang/sdk.cloud.Bucket"`.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Resource path, when the simulator reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Runtime attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<serde_json::Value>,
    /// Declared props.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<serde_json::Value>,
}

/// Failure of a resource configuration lookup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLookupError {
    /// No simulator resource backs this path.
    #[error("resource {path} not found")]
    NotFound {
        /// Path that was looked up.
        path: String,
    },
    /// Any other lookup failure.
    #[error("resource config lookup failed: {0}")]
    Other(String),
}

/// Looks up simulator resource configuration by construct path.
pub trait ResourceConfigSource: Send + Sync {
    /// Returns the configuration of the resource at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLookupError::NotFound`] when no resource exists at
    /// `path`, and [`ConfigLookupError::Other`] for any other failure.
    fn resource_config(&self, path: &str) -> Result<ResourceConfig, ConfigLookupError>;
}

/// Looks up `path`, treating "not found" as absent.
///
/// A structural node may legitimately have no resource behind it.
///
/// # Errors
///
/// Propagates [`ConfigLookupError::Other`] unchanged.
pub fn find_resource_config(
    source: &dyn ResourceConfigSource,
    path: &str,
) -> Result<Option<ResourceConfig>, ConfigLookupError> {
    match source.resource_config(path) {
        Ok(config) => Ok(Some(config)),
        Err(ConfigLookupError::NotFound { .. }) => {
            tracing::trace!(path, "no resource config");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
