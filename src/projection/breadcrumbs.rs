//! Breadcrumb projection.

use super::TreeProjector;
use crate::ports::resource_config::ConfigLookupError;
use crate::view::NodeSummary;

impl TreeProjector<'_, '_> {
    /// Ancestors of `path`, root first, excluding the node itself.
    ///
    /// Empty for the root and for paths that do not resolve.
    ///
    /// # Errors
    ///
    /// Returns an error if type resolution fails unexpectedly.
    pub fn to_breadcrumbs(&self, path: &str) -> Result<Vec<NodeSummary>, ConfigLookupError> {
        let mut crumbs = Vec::new();
        let mut failure = None;
        self.nodes.visit_parents(path, |ancestor| {
            if failure.is_some() {
                return;
            }
            match self.types.summarize(ancestor) {
                Ok(summary) => crumbs.push(summary),
                Err(err) => failure = Some(err),
            }
        });
        match failure {
            Some(err) => Err(err),
            None => Ok(crumbs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::resource_config::{ResourceConfig, ResourceConfigSource};
    use crate::resource_type::ResourceTypeResolver;
    use crate::tree::{ConstructNode, NodeMap};
    use serde_json::json;

    struct Configs;

    impl ResourceConfigSource for Configs {
        fn resource_config(&self, path: &str) -> Result<ResourceConfig, ConfigLookupError> {
            if path == "root/a/b" {
                Ok(ResourceConfig {
                    resource_type: "cloud.Api".into(),
                    path: None,
                    attrs: None,
                    props: None,
                })
            } else {
                Err(ConfigLookupError::NotFound { path: path.into() })
            }
        }
    }

    struct Unreachable;

    impl ResourceConfigSource for Unreachable {
        fn resource_config(&self, path: &str) -> Result<ResourceConfig, ConfigLookupError> {
            if path == "root/a" {
                Err(ConfigLookupError::Other("backend offline".into()))
            } else {
                Err(ConfigLookupError::NotFound { path: path.into() })
            }
        }
    }

    fn tree() -> ConstructNode {
        serde_json::from_value(json!({
            "id": "root",
            "path": "root",
            "children": {"a": {
                "id": "a",
                "path": "root/a",
                "display": {"hidden": true},
                "children": {"b": {
                    "id": "b",
                    "path": "root/a/b",
                    "children": {"c": {"id": "c", "path": "root/a/b/c"}}
                }}
            }}
        }))
        .unwrap()
    }

    #[test]
    fn depth_three_path_yields_three_crumbs_root_first() {
        let tree = tree();
        let nodes = NodeMap::build(&tree);
        let types = ResourceTypeResolver::new(&Configs);
        let crumbs = TreeProjector::new(&nodes, &types).to_breadcrumbs("root/a/b/c").unwrap();

        let paths: Vec<&str> = crumbs.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, ["root", "root/a", "root/a/b"]);
        assert_eq!(crumbs[2].resource_type, "cloud.Api");
        assert_eq!(crumbs[0].resource_type, "constructs.Construct");
    }

    #[test]
    fn root_and_unknown_paths_yield_nothing() {
        let tree = tree();
        let nodes = NodeMap::build(&tree);
        let types = ResourceTypeResolver::new(&Configs);
        let projector = TreeProjector::new(&nodes, &types);
        assert!(projector.to_breadcrumbs("root").unwrap().is_empty());
        assert!(projector.to_breadcrumbs("root/zzz").unwrap().is_empty());
    }

    #[test]
    fn ancestor_lookup_failure_fails_the_whole_trail() {
        let tree = tree();
        let nodes = NodeMap::build(&tree);
        let types = ResourceTypeResolver::new(&Unreachable);
        let err = TreeProjector::new(&nodes, &types).to_breadcrumbs("root/a/b/c").unwrap_err();
        assert!(matches!(err, ConfigLookupError::Other(ref msg) if msg == "backend offline"));
    }
}
