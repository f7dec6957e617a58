//! Structured errors surfaced by console queries.

use serde::Serialize;

use crate::ports::resource_config::ConfigLookupError;

/// Failure of a single console query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The requested path does not resolve in the current tree.
    #[error("node was not found: {path}")]
    NotFound {
        /// Path that was asked for.
        path: String,
    },
    /// A query that needs a path was invoked without one.
    #[error("path was not provided")]
    PathMissing,
    /// The resource configuration lookup failed for a reason other than "not found".
    #[error(transparent)]
    Upstream(#[from] ConfigLookupError),
    /// An external source (tree, logs) could not be read.
    #[error("failed to read {what}: {source}")]
    Source {
        /// Which source failed.
        what: &'static str,
        /// Underlying failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Machine-readable category of a [`QueryError`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Primary entity missing.
    NotFound,
    /// Collaborator failed unexpectedly.
    Upstream,
}

/// Serializable form of a [`QueryError`] handed to the transport layer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorReport {
    /// Error category.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
}

impl QueryError {
    /// Category of this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } | Self::PathMissing => ErrorCode::NotFound,
            Self::Upstream(_) | Self::Source { .. } => ErrorCode::Upstream,
        }
    }

    /// Structured report for this error.
    #[must_use]
    pub fn report(&self) -> ErrorReport {
        ErrorReport { code: self.code(), message: self.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_and_missing_node_share_not_found_code() {
        assert_eq!(QueryError::PathMissing.code(), ErrorCode::NotFound);
        let err = QueryError::NotFound { path: "root/x".into() };
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.to_string(), "node was not found: root/x");
    }

    #[test]
    fn upstream_report_serializes_code() {
        let err = QueryError::from(ConfigLookupError::Other("simulator crashed".into()));
        let report = serde_json::to_value(err.report()).unwrap();
        assert_eq!(report["code"], "UPSTREAM");
        assert!(report["message"].as_str().unwrap().contains("simulator crashed"));
    }
}
