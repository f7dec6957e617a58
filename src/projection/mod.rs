//! Projections of the construct tree into console view models.
//!
//! All projections share one visibility rule: a node flagged
//! `display.hidden` is left out of every output, together with its
//! subtree. Hidden nodes stay in the [`NodeMap`] so their paths resolve.

mod breadcrumbs;
mod explorer;
mod map;

use crate::resource_type::ResourceTypeResolver;
use crate::tree::NodeMap;

/// Converts a construct tree into explorer, map and breadcrumb shapes.
pub struct TreeProjector<'m, 'a> {
    nodes: &'m NodeMap<'a>,
    types: &'m ResourceTypeResolver<'m>,
}

impl<'m, 'a> TreeProjector<'m, 'a> {
    /// Creates a projector over `nodes`.
    #[must_use]
    pub fn new(nodes: &'m NodeMap<'a>, types: &'m ResourceTypeResolver<'m>) -> Self {
        Self { nodes, types }
    }
}
