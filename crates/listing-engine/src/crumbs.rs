//! Breadcrumb resolution
//!
//! Resolves the ancestor chain of a node for breadcrumb display,
//! root first. The store's fetch order is its own business; the
//! resolver reorders fetched nodes to match the ancestor id sequence
//! explicitly.

use crate::Result;
use listing_model::{ResourceNode, ResourceStore};
use std::collections::HashMap;
use std::sync::Arc;

/// Resolves ancestor chains for breadcrumb display
pub struct CrumbResolver {
    store: Arc<dyn ResourceStore>,
}

impl CrumbResolver {
    pub fn new(store: Arc<dyn ResourceStore>) -> Self {
        Self { store }
    }

    /// The node's ancestors, root first, immediate parent last
    ///
    /// `Ok(None)` for an unsaved node or one with no ancestors.
    /// Ancestor ids the store cannot resolve are skipped.
    pub fn crumbs(&self, node: &ResourceNode) -> Result<Option<Vec<ResourceNode>>> {
        if !node.is_saved() {
            return Ok(None);
        }

        let mut chain = self.store.ancestors(node.id)?;
        chain.reverse();
        if chain.is_empty() {
            return Ok(None);
        }

        let mut by_id: HashMap<i64, ResourceNode> = self
            .store
            .fetch(&chain)?
            .into_iter()
            .map(|node| (node.id, node))
            .collect();

        Ok(Some(
            chain.iter().filter_map(|id| by_id.remove(id)).collect(),
        ))
    }
}
