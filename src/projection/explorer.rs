//! Explorer tree projection.

use super::TreeProjector;
use crate::ports::resource_config::ConfigLookupError;
use crate::tree::ConstructNode;
use crate::view::ExplorerItem;

impl TreeProjector<'_, '_> {
    /// Projects `node` and its visible descendants into an explorer tree.
    ///
    /// `child_items` is `None` for nodes without a children field and an
    /// empty list for nodes whose children are all hidden.
    ///
    /// # Errors
    ///
    /// Returns an error if type resolution fails unexpectedly.
    pub fn to_explorer_tree(&self, node: &ConstructNode) -> Result<ExplorerItem, ConfigLookupError> {
        let child_items = match &node.children {
            Some(_) => Some(
                node.visible_children()
                    .map(|child| self.to_explorer_tree(child))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            None => None,
        };

        Ok(ExplorerItem {
            id: node.path.clone(),
            label: node.id.clone(),
            resource_type: self.types.resolve(node)?,
            display: node.display.clone(),
            child_items,
        })
    }
}
