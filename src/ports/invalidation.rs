//! Invalidation port: out-of-band notifications that cached results are stale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Console query names carried by invalidation tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum QueryName {
    /// `app.logs`
    #[serde(rename = "app.logs")]
    Logs,
    /// `app.error`
    #[serde(rename = "app.error")]
    Error,
    /// `app.explorerTree`
    #[serde(rename = "app.explorerTree")]
    ExplorerTree,
    /// `app.childRelationships`
    #[serde(rename = "app.childRelationships")]
    ChildRelationships,
    /// `app.nodeBreadcrumbs`
    #[serde(rename = "app.nodeBreadcrumbs")]
    NodeBreadcrumbs,
    /// `app.node`
    #[serde(rename = "app.node")]
    Node,
    /// `app.nodeMetadata`
    #[serde(rename = "app.nodeMetadata")]
    NodeMetadata,
    /// `app.map`
    #[serde(rename = "app.map")]
    Map,
}

impl QueryName {
    /// Every query name.
    pub const ALL: [Self; 8] = [
        Self::Logs,
        Self::Error,
        Self::ExplorerTree,
        Self::ChildRelationships,
        Self::NodeBreadcrumbs,
        Self::Node,
        Self::NodeMetadata,
        Self::Map,
    ];

    /// Wire name of the query.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Logs => "app.logs",
            Self::Error => "app.error",
            Self::ExplorerTree => "app.explorerTree",
            Self::ChildRelationships => "app.childRelationships",
            Self::NodeBreadcrumbs => "app.nodeBreadcrumbs",
            Self::Node => "app.node",
            Self::NodeMetadata => "app.nodeMetadata",
            Self::Map => "app.map",
        }
    }
}

impl fmt::Display for QueryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("unknown query name: {s}"))
    }
}

/// Source of invalidation tokens.
///
/// The query core never publishes; callers subscribe and re-run the named
/// query when a token arrives.
pub trait InvalidationSource: Send + Sync {
    /// Opens a new subscription. Tokens published before this call are not seen.
    fn subscribe(&self) -> broadcast::Receiver<QueryName>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip_through_from_str() {
        for name in QueryName::ALL {
            assert_eq!(name.as_str().parse::<QueryName>().unwrap(), name);
            assert_eq!(serde_json::to_value(name).unwrap(), name.as_str());
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("app.bogus".parse::<QueryName>().is_err());
        // No console query answers `app.details`.
        assert!("app.details".parse::<QueryName>().is_err());
    }
}
