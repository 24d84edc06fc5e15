//! External collaborator traits
//!
//! The resource store, template-variable subsystem, localization
//! catalog and duplication service live outside this workspace. The
//! engine programs against these traits; `listing-test-utils` ships
//! in-memory implementations for tests.

use crate::error::Result;
use crate::node::{ResourceNode, Row};
use crate::query::ResourceQuery;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The hierarchical resource store
///
/// Implementations execute composed queries and bulk state updates.
/// Consistency and retry policy belong to the implementation; errors
/// propagate to the engine's caller unmodified.
pub trait ResourceStore: Send + Sync {
    /// Execute a query, returning rows with the requested field
    /// values attached, ordered and windowed as the query demands
    fn select(&self, query: &ResourceQuery) -> Result<Vec<Row>>;

    /// Count the rows matching a query, ignoring its window
    fn count(&self, query: &ResourceQuery) -> Result<usize>;

    /// Fetch nodes by id, in the store's natural order
    ///
    /// Ids with no matching node are omitted; callers that need a
    /// specific order must reorder the result themselves.
    fn fetch(&self, ids: &[i64]) -> Result<Vec<ResourceNode>>;

    /// The ancestor id chain of a node, immediate parent first,
    /// root last
    fn ancestors(&self, id: i64) -> Result<Vec<i64>>;

    /// Set the publish state on all targets
    fn set_published(&self, ids: &[i64], published: bool) -> Result<()>;

    /// Set the soft-delete state on all targets
    fn set_deleted(&self, ids: &[i64], deleted: bool) -> Result<()>;
}

/// Duplication service for the `duplicate` bulk action
pub trait Duplicator: Send + Sync {
    /// Duplicate one resource, returning the new node's id
    fn duplicate(&self, id: i64) -> Result<i64>;
}

/// Declared type of a template-variable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Checkbox,
    Listbox,
    ListboxMultiple,
    Radio,
}

impl FieldKind {
    /// Whether stored values are `||`-delimited multi-selections
    pub fn is_multiple(&self) -> bool {
        matches!(self, FieldKind::Checkbox | FieldKind::ListboxMultiple)
    }
}

/// A template-variable field definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub kind: FieldKind,
    /// Raw encoded option-list source; empty when the field has no
    /// option list
    pub elements: String,
}

/// One decoded option-list entry, before normalization
///
/// `key` is the stored code, `value` the display label. Either side
/// may come back empty from the decoder; the option resolver fills
/// the empty side from the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOption {
    pub value: String,
    pub key: String,
}

/// The template-variable subsystem
pub trait FieldSource: Send + Sync {
    /// Look up a field definition by name; `None` when no such field
    /// is declared
    fn definition(&self, name: &str) -> Result<Option<FieldDefinition>>;

    /// Decode a raw option-list source into its ordered entries
    fn decode_options(&self, raw: &str) -> Result<Vec<RawOption>>;
}

/// Localization message catalog
pub trait Messages: Send + Sync {
    /// All messages under a namespace, as key → localized string
    fn namespace(&self, namespace: &str) -> HashMap<String, String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_valued_kinds() {
        assert!(FieldKind::Checkbox.is_multiple());
        assert!(FieldKind::ListboxMultiple.is_multiple());
        assert!(!FieldKind::Listbox.is_multiple());
        assert!(!FieldKind::Text.is_multiple());
    }
}
