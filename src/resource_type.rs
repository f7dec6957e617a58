//! Display type resolution for construct nodes.
//!
//! A node's type comes from the first tier that yields a value:
//!
//! 1. the `wing:console:type` attribute (test fixtures only),
//! 2. the simulator's resource configuration for the node's path,
//! 3. the node's `constructInfo.fqn`,
//! 4. [`DEFAULT_RESOURCE_TYPE`].

use crate::ports::resource_config::{find_resource_config, ConfigLookupError, ResourceConfigSource};
use crate::tree::ConstructNode;
use crate::view::NodeSummary;

/// Type reported when no tier yields a value.
pub const DEFAULT_RESOURCE_TYPE: &str = "constructs.Construct";

/// One tier of the fallback chain. `Ok(None)` defers to the next tier.
pub type TypeTier =
    fn(&ConstructNode, &dyn ResourceConfigSource) -> Result<Option<String>, ConfigLookupError>;

/// The production fallback chain, in priority order.
pub const STANDARD_TIERS: [TypeTier; 3] = [console_type_override, configured_type, construct_fqn];

/// Tier 1: the `wing:console:type` attribute.
///
/// # Errors
///
/// Never fails.
pub fn console_type_override(
    node: &ConstructNode,
    _configs: &dyn ResourceConfigSource,
) -> Result<Option<String>, ConfigLookupError> {
    Ok(node.console_type().map(str::to_owned))
}

/// Tier 2: the simulator's resource configuration.
///
/// # Errors
///
/// Propagates lookup failures other than "not found".
pub fn configured_type(
    node: &ConstructNode,
    configs: &dyn ResourceConfigSource,
) -> Result<Option<String>, ConfigLookupError> {
    Ok(find_resource_config(configs, &node.path)?.map(|config| config.resource_type))
}

/// Tier 3: the construct info descriptor.
///
/// # Errors
///
/// Never fails.
pub fn construct_fqn(
    node: &ConstructNode,
    _configs: &dyn ResourceConfigSource,
) -> Result<Option<String>, ConfigLookupError> {
    Ok(node.construct_info.as_ref().map(|info| info.fqn.clone()))
}

/// Resolves node types through an ordered list of tiers.
pub struct ResourceTypeResolver<'a> {
    configs: &'a dyn ResourceConfigSource,
    tiers: &'a [TypeTier],
}

impl<'a> ResourceTypeResolver<'a> {
    /// Creates a resolver using [`STANDARD_TIERS`].
    #[must_use]
    pub fn new(configs: &'a dyn ResourceConfigSource) -> Self {
        Self::with_tiers(configs, &STANDARD_TIERS)
    }

    /// Creates a resolver with a custom tier order.
    #[must_use]
    pub fn with_tiers(configs: &'a dyn ResourceConfigSource, tiers: &'a [TypeTier]) -> Self {
        Self { configs, tiers }
    }

    /// Resolves the display type of `node`.
    ///
    /// # Errors
    ///
    /// Returns an error if a tier fails with anything but "not found".
    pub fn resolve(&self, node: &ConstructNode) -> Result<String, ConfigLookupError> {
        for tier in self.tiers {
            if let Some(resource_type) = tier(node, self.configs)? {
                return Ok(resource_type);
            }
        }
        Ok(DEFAULT_RESOURCE_TYPE.to_owned())
    }

    /// Builds the `{id, path, type}` summary of `node`.
    ///
    /// # Errors
    ///
    /// Returns an error if type resolution fails.
    pub fn summarize(&self, node: &ConstructNode) -> Result<NodeSummary, ConfigLookupError> {
        Ok(NodeSummary {
            id: node.id.clone(),
            path: node.path.clone(),
            resource_type: self.resolve(node)?,
        })
    }
}
