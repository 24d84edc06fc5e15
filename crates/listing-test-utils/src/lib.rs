//! Shared in-memory collaborators for the listing-engine workspace
//!
//! These implementations back the unit and integration tests: a
//! hierarchical `MemoryStore` (also the `Duplicator`), a
//! `MemoryFields` template-variable source, and a `StaticMessages`
//! catalog. They are test fixtures, not reference backends.

pub mod fields;
pub mod messages;
pub mod store;

pub use fields::MemoryFields;
pub use messages::StaticMessages;
pub use store::MemoryStore;

use listing_model::ResourceNode;

/// Build a node with the attributes tests care about
pub fn node(id: i64, parent: i64, pagetitle: &str) -> ResourceNode {
    ResourceNode {
        id,
        parent,
        pagetitle: pagetitle.to_string(),
        isfolder: false,
        menuindex: id,
        published: false,
        deleted: false,
    }
}

/// Build a folder node
pub fn folder(id: i64, parent: i64, pagetitle: &str) -> ResourceNode {
    ResourceNode {
        isfolder: true,
        ..node(id, parent, pagetitle)
    }
}
