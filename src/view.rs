//! View models returned to console callers.
//!
//! All of these are recomputed on every query and serialize in the
//! camelCase shape the console front end consumes.

use serde::Serialize;

use crate::tree::NodeDisplay;

/// Identity and resolved type of a node.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NodeSummary {
    /// Leaf id.
    pub id: String,
    /// Full path.
    pub path: String,
    /// Resolved resource type.
    #[serde(rename = "type")]
    pub resource_type: String,
}

/// A connected node plus the relationship label of the connection.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Connected {
    /// The node on the other end.
    #[serde(flatten)]
    pub node: NodeSummary,
    /// Relationship label as recorded on the connection.
    pub relationship: String,
}

/// A node's connections split by direction.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct NodeConnections {
    /// Connections pointing at the node.
    pub inbound: Vec<Connected>,
    /// Connections leaving the node.
    pub outbound: Vec<Connected>,
}

/// Explorer tree item.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerItem {
    /// Node path.
    pub id: String,
    /// Node id.
    pub label: String,
    /// Resolved resource type.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Display hints, copied from the node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<NodeDisplay>,
    /// Visible children; `None` when the node has no children field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_items: Option<Vec<ExplorerItem>>,
}

/// Payload of a map node.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapNodeData {
    /// Node id.
    pub label: String,
    /// Resolved resource type.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Display hints, copied from the node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<NodeDisplay>,
}

/// Map node; nested like the construct tree.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapNode {
    /// Node path.
    pub id: String,
    /// Label, type and display.
    pub data: MapNodeData,
    /// Visible children; `None` when the node has no children field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MapNode>>,
}

/// Directed map edge from a connection's source to its target.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct MapEdge {
    /// `"<source> -> <target>"`.
    pub id: String,
    /// Source path.
    pub source: String,
    /// Target path.
    pub target: String,
}

impl MapEdge {
    /// Creates the edge `source -> target`.
    #[must_use]
    pub fn new(source: &str, target: &str) -> Self {
        Self { id: format!("{source} -> {target}"), source: source.to_owned(), target: target.to_owned() }
    }
}

/// Map graph: the visible tree as nested nodes plus de-duplicated edges.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapGraph {
    /// Holds exactly one element, the root.
    pub nodes: Vec<MapNode>,
    /// Edges, unique by id.
    pub edges: Vec<MapEdge>,
}

/// Child node header used by [`ChildRelationship`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChildNode {
    /// Identity and type.
    #[serde(flatten)]
    pub summary: NodeSummary,
    /// Display hints, copied from the node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<NodeDisplay>,
}

/// A visible child together with its visible connections.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChildRelationship {
    /// The child.
    pub node: ChildNode,
    /// Connections pointing at the child.
    pub inbound: Vec<Connected>,
    /// Connections leaving the child.
    pub outbound: Vec<Connected>,
}

/// Resource detail for one node.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NodeDetail {
    /// Leaf id.
    pub id: String,
    /// Full path.
    pub path: String,
    /// Resolved resource type.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Simulator attributes, if a resource backs the node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<serde_json::Value>,
    /// Simulator props, if a resource backs the node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<serde_json::Value>,
}

/// Header of [`NodeMetadata`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetadataNode {
    /// Identity and type.
    #[serde(flatten)]
    pub summary: NodeSummary,
    /// Simulator props, if a resource backs the node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<serde_json::Value>,
}

/// A node with its de-duplicated, visible connections.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NodeMetadata {
    /// The node.
    pub node: MetadataNode,
    /// Connections pointing at the node.
    pub inbound: Vec<Connected>,
    /// Connections leaving the node.
    pub outbound: Vec<Connected>,
}
