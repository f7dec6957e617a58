//! Console queries.
//!
//! Every query fetches its own tree snapshot and builds its own
//! [`NodeMap`]; nothing is cached between calls. Callers learn about
//! staleness through [`Console::subscribe`] and simply query again.

use tokio::sync::broadcast;

use crate::connections::ConnectionResolver;
use crate::context::ServiceContext;
use crate::error::QueryError;
use crate::logs::{filter_logs, LogEntry, LogFilter};
use crate::ports::invalidation::QueryName;
use crate::ports::resource_config::find_resource_config;
use crate::projection::TreeProjector;
use crate::resource_type::ResourceTypeResolver;
use crate::tree::{ConstructNode, NodeMap};
use crate::view::{
    ChildNode, ChildRelationship, ExplorerItem, MapGraph, MetadataNode, NodeDetail, NodeMetadata,
    NodeSummary,
};

/// Query surface over a [`ServiceContext`].
pub struct Console<'c> {
    ctx: &'c ServiceContext,
}

impl<'c> Console<'c> {
    /// Creates a console over `ctx`.
    #[must_use]
    pub fn new(ctx: &'c ServiceContext) -> Self {
        Self { ctx }
    }

    /// `app.explorerTree`: the visible tree as explorer items.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be read or type resolution fails.
    pub fn explorer_tree(&self) -> Result<ExplorerItem, QueryError> {
        let tree = self.snapshot()?;
        let nodes = NodeMap::build(&tree);
        let types = self.types();
        let item = TreeProjector::new(&nodes, &types).to_explorer_tree(&tree)?;
        tracing::debug!(nodes = nodes.len(), "explorer tree");
        Ok(item)
    }

    /// `app.map`: nested map nodes plus de-duplicated edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be read or type resolution fails.
    pub fn map(&self) -> Result<MapGraph, QueryError> {
        let tree = self.snapshot()?;
        let nodes = NodeMap::build(&tree);
        let types = self.types();
        let graph = TreeProjector::new(&nodes, &types).to_map(&tree)?;
        tracing::debug!(nodes = nodes.len(), edges = graph.edges.len(), "map");
        Ok(graph)
    }

    /// `app.childRelationships`: visible children of `path` with their connections.
    ///
    /// Empty when `path` is absent or does not resolve.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be read or type resolution fails.
    pub fn child_relationships(
        &self,
        path: Option<&str>,
    ) -> Result<Vec<ChildRelationship>, QueryError> {
        let tree = self.snapshot()?;
        let nodes = NodeMap::build(&tree);
        let types = self.types();
        let connections = ConnectionResolver::new(&nodes, &types);

        let Some(path) = path else {
            return Ok(Vec::new());
        };

        let child_paths = nodes
            .get(path)
            .into_iter()
            .flat_map(|node| node.child_nodes())
            .map(|child| child.path.as_str());
        let mut relationships = Vec::new();
        for child in nodes.get_all(child_paths).into_iter().filter(|child| !child.is_hidden()) {
            let resolved = connections.resolve(child)?;
            relationships.push(ChildRelationship {
                node: ChildNode { summary: types.summarize(child)?, display: child.display.clone() },
                inbound: resolved.inbound,
                outbound: resolved.outbound,
            });
        }
        tracing::debug!(path, children = relationships.len(), "child relationships");
        Ok(relationships)
    }

    /// `app.nodeBreadcrumbs`: ancestors of `path`, root first.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be read or type resolution fails.
    pub fn breadcrumbs(&self, path: Option<&str>) -> Result<Vec<NodeSummary>, QueryError> {
        let tree = self.snapshot()?;
        let nodes = NodeMap::build(&tree);
        let types = self.types();
        let Some(path) = path else {
            return Ok(Vec::new());
        };
        Ok(TreeProjector::new(&nodes, &types).to_breadcrumbs(path)?)
    }

    /// `app.node`: identity, type and simulator attributes of one node.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotFound`] if `path` does not resolve, or an
    /// upstream error if the resource lookup fails unexpectedly.
    pub fn node_detail(&self, path: Option<&str>) -> Result<NodeDetail, QueryError> {
        let tree = self.snapshot()?;
        let nodes = NodeMap::build(&tree);
        let node = lookup(&nodes, path)?;
        let config = find_resource_config(self.ctx.resources.as_ref(), &node.path)?;
        let (attributes, props) = config.map_or((None, None), |config| (config.attrs, config.props));

        Ok(NodeDetail {
            id: node.id.clone(),
            path: node.path.clone(),
            resource_type: self.types().resolve(node)?,
            attributes,
            props,
        })
    }

    /// `app.nodeMetadata`: one node with its de-duplicated, visible connections.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::PathMissing`] without a path,
    /// [`QueryError::NotFound`] if it does not resolve, or an upstream error
    /// if a resource lookup fails unexpectedly.
    pub fn node_metadata(&self, path: Option<&str>) -> Result<NodeMetadata, QueryError> {
        let path = path.ok_or(QueryError::PathMissing)?;
        let tree = self.snapshot()?;
        let nodes = NodeMap::build(&tree);
        let node = lookup(&nodes, Some(path))?;
        let types = self.types();
        let resolved = ConnectionResolver::new(&nodes, &types).resolve(node)?;
        let props = find_resource_config(self.ctx.resources.as_ref(), path)?
            .and_then(|config| config.props);

        Ok(NodeMetadata {
            node: MetadataNode { summary: types.summarize(node)?, props },
            inbound: resolved.inbound,
            outbound: resolved.outbound,
        })
    }

    /// `app.logs`: simulator log entries passing `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the log stream cannot be read.
    pub fn logs(&self, filter: &LogFilter) -> Result<Vec<LogEntry>, QueryError> {
        let entries = self
            .ctx
            .logs
            .logs()
            .map_err(|source| QueryError::Source { what: "logs", source })?;
        Ok(filter_logs(entries, filter))
    }

    /// `app.error`: the app's error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.ctx.logs.error_message()
    }

    /// `app.invalidateQuery`: subscribes to invalidation tokens.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<QueryName> {
        self.ctx.invalidation.subscribe()
    }

    fn snapshot(&self) -> Result<ConstructNode, QueryError> {
        self.ctx.tree.tree().map_err(|source| QueryError::Source { what: "construct tree", source })
    }

    fn types(&self) -> ResourceTypeResolver<'c> {
        ResourceTypeResolver::new(self.ctx.resources.as_ref())
    }
}

/// Resolves a primary entity, failing with `NotFound`.
fn lookup<'a>(nodes: &NodeMap<'a>, path: Option<&str>) -> Result<&'a ConstructNode, QueryError> {
    let path = path.unwrap_or_default();
    nodes.get(path).ok_or_else(|| QueryError::NotFound { path: path.to_owned() })
}
