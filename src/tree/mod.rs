//! Construct tree data model as produced by the simulator.
//!
//! The tree is read-only input. Nothing in this crate mutates it; derived
//! indices such as [`NodeMap`] borrow from it.

pub mod node_map;

pub use node_map::NodeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single node of the construct tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConstructNode {
    /// Leaf label, unique among siblings.
    pub id: String,
    /// Slash-delimited path, unique across the whole tree.
    pub path: String,
    /// Child nodes keyed by child id. `None` for leaves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<IndexMap<String, ConstructNode>>,
    /// Free-form attributes, including connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<NodeAttributes>,
    /// Presentation hints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<NodeDisplay>,
    /// Generic construct descriptor used as a type fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construct_info: Option<ConstructInfo>,
}

impl ConstructNode {
    /// Returns `true` when the node is flagged `display.hidden`.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.display.as_ref().and_then(|d| d.hidden).unwrap_or(false)
    }

    /// Raw connection list, empty when the attribute is absent.
    #[must_use]
    pub fn connections(&self) -> &[NodeConnection] {
        self.attributes.as_ref().and_then(|a| a.connections.as_deref()).unwrap_or_default()
    }

    /// Iterates over direct children in document order.
    pub fn child_nodes(&self) -> impl Iterator<Item = &ConstructNode> {
        self.children.iter().flat_map(|children| children.values())
    }

    /// Iterates over direct children that are not hidden.
    pub fn visible_children(&self) -> impl Iterator<Item = &ConstructNode> {
        self.child_nodes().filter(|child| !child.is_hidden())
    }

    /// The `wing:console:type` override, if set.
    #[must_use]
    pub fn console_type(&self) -> Option<&str> {
        self.attributes.as_ref().and_then(|a| a.console_type.as_deref())
    }
}

/// Attributes attached to a construct node.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NodeAttributes {
    /// Connections to other resources.
    #[serde(rename = "wing:resource:connections", default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<Vec<NodeConnection>>,
    /// Display type override.
    #[serde(rename = "wing:console:type", default, skip_serializing_if = "Option::is_none")]
    pub console_type: Option<String>,
    /// Any other attribute, kept verbatim.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

/// Which side of a connection a node sits on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The referenced resource points at this node.
    Inbound,
    /// This node points at the referenced resource.
    Outbound,
}

impl Direction {
    /// Wire name of the direction.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }
}

/// A directed relationship between two resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeConnection {
    /// Direction relative to the node carrying the connection.
    pub direction: Direction,
    /// Path of the other resource.
    pub resource: String,
    /// Free-form relationship label, e.g. `"invoke"`.
    pub relationship: String,
}

/// Presentation hints for a node.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeDisplay {
    /// Hide the node from every user-facing projection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Human title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Human description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Module the construct was declared in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_module: Option<String>,
    /// Unrecognized display keys.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

/// Generic construct descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstructInfo {
    /// Fully qualified construct name.
    pub fqn: String,
    /// Library version.
    #[serde(default)]
    pub version: String,
}
