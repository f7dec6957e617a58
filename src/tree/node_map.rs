//! Path index over a construct tree.

use std::collections::{HashMap, HashSet};

use super::ConstructNode;

/// Flattened `path -> node` index with parent links.
///
/// Built once per query from a borrowed tree and discarded afterwards.
/// Hidden nodes are indexed like any other node so their paths still resolve.
#[derive(Debug)]
pub struct NodeMap<'a> {
    root: &'a ConstructNode,
    nodes: HashMap<&'a str, &'a ConstructNode>,
    parents: HashMap<&'a str, &'a str>,
}

impl<'a> NodeMap<'a> {
    /// Walks `tree` once and records every node by path.
    #[must_use]
    pub fn build(tree: &'a ConstructNode) -> Self {
        let mut nodes = HashMap::new();
        let mut parents = HashMap::new();
        let mut stack = vec![tree];

        while let Some(node) = stack.pop() {
            nodes.entry(node.path.as_str()).or_insert(node);
            for child in node.child_nodes() {
                parents.entry(child.path.as_str()).or_insert(node.path.as_str());
                stack.push(child);
            }
        }

        Self { root: tree, nodes, parents }
    }

    /// The tree root.
    #[must_use]
    pub fn root(&self) -> &'a ConstructNode {
        self.root
    }

    /// Number of indexed nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing is indexed. Never the case for a built map.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&'a ConstructNode> {
        self.nodes.get(path).copied()
    }

    /// Resolves every path that exists, silently skipping the rest.
    pub fn get_all<I, S>(&self, paths: I) -> Vec<&'a ConstructNode>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths.into_iter().filter_map(|path| self.get(path.as_ref())).collect()
    }

    /// Parent of the node at `path`.
    #[must_use]
    pub fn parent(&self, path: &str) -> Option<&'a ConstructNode> {
        self.parents.get(path).and_then(|parent| self.get(parent))
    }

    /// Ancestors of the node at `path`, outermost first, excluding the node.
    ///
    /// The walk stops at the first path it has already seen, so a tree whose
    /// children repeat an ancestor's path still terminates.
    #[must_use]
    pub fn ancestors(&self, path: &str) -> Vec<&'a ConstructNode> {
        if self.get(path).is_none() {
            return Vec::new();
        }
        let mut chain = Vec::new();
        let mut seen = HashSet::from([path]);
        let mut current = path;
        while let Some(parent) = self.parent(current) {
            if !seen.insert(parent.path.as_str()) {
                tracing::warn!(path, repeated = %parent.path, "parent chain revisits a path");
                break;
            }
            chain.push(parent);
            current = parent.path.as_str();
        }
        chain.reverse();
        chain
    }

    /// Calls `visitor` for each ancestor of `path` in root-to-leaf order.
    ///
    /// The node at `path` itself is not visited. Unknown paths visit nothing.
    pub fn visit_parents<F>(&self, path: &str, mut visitor: F)
    where
        F: FnMut(&'a ConstructNode),
    {
        for ancestor in self.ancestors(path) {
            visitor(ancestor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> ConstructNode {
        serde_json::from_value(json!({
            "id": "root",
            "path": "root",
            "children": {
                "a": {
                    "id": "a",
                    "path": "root/a",
                    "children": {
                        "b": {
                            "id": "b",
                            "path": "root/a/b",
                            "children": {
                                "c": {"id": "c", "path": "root/a/b/c"}
                            }
                        }
                    }
                },
                "hidden": {"id": "hidden", "path": "root/hidden", "display": {"hidden": true}}
            }
        }))
        .unwrap()
    }

    #[test]
    fn indexes_every_node_including_hidden() {
        let tree = sample_tree();
        let map = NodeMap::build(&tree);
        assert_eq!(map.len(), 5);
        assert_eq!(map.get("root/a/b/c").map(|n| n.id.as_str()), Some("c"));
        assert!(map.get("root/hidden").is_some());
        assert!(map.get("root/missing").is_none());
        assert_eq!(map.root().path, "root");
    }

    #[test]
    fn get_all_skips_missing_paths() {
        let tree = sample_tree();
        let map = NodeMap::build(&tree);
        let found = map.get_all(["root/a", "nope", "root/a/b"]);
        let paths: Vec<&str> = found.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, ["root/a", "root/a/b"]);
    }

    #[test]
    fn ancestors_stop_when_a_child_repeats_an_ancestor_path() {
        let tree: ConstructNode = serde_json::from_value(json!({
            "id": "root",
            "path": "root",
            "children": {
                "again": {"id": "again", "path": "root"},
                "x": {
                    "id": "x",
                    "path": "root/x",
                    "children": {"back": {"id": "back", "path": "root"}}
                }
            }
        }))
        .unwrap();
        let map = NodeMap::build(&tree);

        assert!(map.ancestors("root").is_empty());
        let paths: Vec<&str> = map.ancestors("root/x").iter().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, ["root"]);

        let mut visited = 0;
        map.visit_parents("root", |_| visited += 1);
        assert_eq!(visited, 0);
    }

    #[test]
    fn visit_parents_runs_root_to_leaf_excluding_start() {
        let tree = sample_tree();
        let map = NodeMap::build(&tree);
        let mut visited = Vec::new();
        map.visit_parents("root/a/b/c", |node| visited.push(node.path.clone()));
        assert_eq!(visited, ["root", "root/a", "root/a/b"]);
    }

    #[test]
    fn visit_parents_of_root_or_unknown_visits_nothing() {
        let tree = sample_tree();
        let map = NodeMap::build(&tree);
        let mut count = 0;
        map.visit_parents("root", |_| count += 1);
        map.visit_parents("root/zzz", |_| count += 1);
        assert_eq!(count, 0);
        assert_eq!(map.parent("root/a").map(|n| n.path.as_str()), Some("root"));
    }
}
