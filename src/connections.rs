//! Connection classification and de-duplication.

use std::collections::HashSet;

use crate::ports::resource_config::ConfigLookupError;
use crate::resource_type::ResourceTypeResolver;
use crate::tree::{ConstructNode, Direction, NodeConnection, NodeMap};
use crate::view::{Connected, NodeConnections};

/// Keeps the first connection per `(direction, resource)` pair, in order.
///
/// The tree cannot express two distinct connections between the same two
/// resources in the same direction, so later duplicates are dropped even
/// when their relationship differs.
pub fn dedup_connections<'c, I>(connections: I) -> Vec<&'c NodeConnection>
where
    I: IntoIterator<Item = &'c NodeConnection>,
{
    let mut seen: HashSet<(Direction, &'c str)> = HashSet::new();
    let mut kept = Vec::new();
    for connection in connections {
        if seen.insert((connection.direction, connection.resource.as_str())) {
            kept.push(connection);
        }
    }
    kept
}

/// Resolves a node's connections against the tree they were recorded in.
pub struct ConnectionResolver<'m, 'a> {
    nodes: &'m NodeMap<'a>,
    types: &'m ResourceTypeResolver<'m>,
}

impl<'m, 'a> ConnectionResolver<'m, 'a> {
    /// Creates a resolver over `nodes`.
    #[must_use]
    pub fn new(nodes: &'m NodeMap<'a>, types: &'m ResourceTypeResolver<'m>) -> Self {
        Self { nodes, types }
    }

    /// De-duplicates, drops hidden or unresolvable targets, and splits by direction.
    ///
    /// A node without a connections attribute yields two empty lists.
    ///
    /// # Errors
    ///
    /// Returns an error if resolving a target's type fails unexpectedly.
    pub fn resolve(&self, node: &ConstructNode) -> Result<NodeConnections, ConfigLookupError> {
        let mut resolved = NodeConnections::default();

        for connection in dedup_connections(node.connections()) {
            let Some(target) = self.visible_target(connection) else {
                continue;
            };
            let connected = Connected {
                node: self.types.summarize(target)?,
                relationship: connection.relationship.clone(),
            };
            match connection.direction {
                Direction::Inbound => resolved.inbound.push(connected),
                Direction::Outbound => resolved.outbound.push(connected),
            }
        }

        Ok(resolved)
    }

    /// The connection's target, unless it is hidden or missing from the tree.
    fn visible_target(&self, connection: &NodeConnection) -> Option<&'a ConstructNode> {
        let target = self.nodes.get(&connection.resource);
        if target.is_none() {
            tracing::debug!(
                resource = %connection.resource,
                direction = connection.direction.as_str(),
                "connection target not in tree"
            );
        }
        target.filter(|target| !target.is_hidden())
    }
}
