//! Map graph projection: nested nodes plus connection edges.

use indexmap::IndexMap;

use super::TreeProjector;
use crate::ports::resource_config::ConfigLookupError;
use crate::tree::{ConstructNode, Direction};
use crate::view::{MapEdge, MapGraph, MapNode, MapNodeData};

impl TreeProjector<'_, '_> {
    /// Projects `root` into the map graph.
    ///
    /// # Errors
    ///
    /// Returns an error if type resolution fails unexpectedly.
    pub fn to_map(&self, root: &ConstructNode) -> Result<MapGraph, ConfigLookupError> {
        let nodes = vec![self.to_map_node(root)?];
        let edges = self.map_edges(root);
        Ok(MapGraph { nodes, edges })
    }

    /// Projects `node` and its visible descendants into a nested map node.
    ///
    /// # Errors
    ///
    /// Returns an error if type resolution fails unexpectedly.
    pub fn to_map_node(&self, node: &ConstructNode) -> Result<MapNode, ConfigLookupError> {
        let children = match &node.children {
            Some(_) => Some(
                node.visible_children()
                    .map(|child| self.to_map_node(child))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            None => None,
        };

        Ok(MapNode {
            id: node.path.clone(),
            data: MapNodeData {
                label: node.id.clone(),
                resource_type: self.types.resolve(node)?,
                display: node.display.clone(),
            },
            children,
        })
    }

    /// Edges for every inbound connection of every visible node under `root`.
    ///
    /// Outbound records never produce edges; the matching inbound record on
    /// the other node does. Edges are unique by id, first occurrence kept.
    #[must_use]
    pub fn map_edges(&self, root: &ConstructNode) -> Vec<MapEdge> {
        let mut edges = IndexMap::new();
        self.collect_edges(root, &mut edges);
        edges.into_values().collect()
    }

    fn collect_edges(&self, node: &ConstructNode, edges: &mut IndexMap<String, MapEdge>) {
        if node.is_hidden() {
            return;
        }

        for connection in node.connections() {
            if connection.direction != Direction::Inbound {
                continue;
            }
            if self.nodes.get(&connection.resource).is_none() {
                tracing::warn!(
                    source = %connection.resource,
                    target = %node.path,
                    "map edge source is not in the construct tree"
                );
            }
            let edge = MapEdge::new(&connection.resource, &node.path);
            edges.entry(edge.id.clone()).or_insert(edge);
        }

        for child in node.child_nodes() {
            self.collect_edges(child, edges);
        }
    }
}
