//! Resource nodes and listing rows
//!
//! A `ResourceNode` is a hierarchical content item owned by the external
//! resource store. The listing engine reads nodes and issues bulk state
//! updates; it never owns their lifecycle.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A hierarchical content node (folder or leaf document)
///
/// Only the attributes the listing engine needs are modeled here; the
/// store may carry more. An `id` of 0 denotes an unsaved node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceNode {
    /// Node id; 0 means the node has not been persisted
    pub id: i64,
    /// Parent node id; 0 for top-level nodes
    pub parent: i64,
    /// Display title
    pub pagetitle: String,
    /// Folders sort before leaf documents
    pub isfolder: bool,
    /// Manual ordering index within the parent
    pub menuindex: i64,
    /// Publish state, toggled by bulk actions
    pub published: bool,
    /// Soft-delete state, toggled by bulk actions
    pub deleted: bool,
}

impl ResourceNode {
    /// Whether the node has been persisted by the store
    pub fn is_saved(&self) -> bool {
        self.id != 0
    }
}

/// A field value attached to a row
///
/// The per-row transform only rewrites `Scalar` values; `Structured`
/// and `Missing` are passed through untouched, which makes the
/// "skip non-scalar" rule a pattern match rather than a type probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// A plain string value, possibly a `||`-delimited multi-value
    Scalar(String),
    /// A value the store already expanded into structured data
    Structured(Value),
    /// The field is not set on this row
    Missing,
}

impl FieldValue {
    /// The scalar content, if this value is scalar
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Scalar(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Scalar(s)
    }
}

/// A resource node annotated with the values of the configured columns
///
/// Rows are constructed per page by the store and discarded after
/// rendering. The option transform replaces a field's raw value with
/// its display value in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// The underlying node
    pub node: ResourceNode,
    /// Column name → field value for every requested column
    #[serde(default)]
    pub values: HashMap<String, FieldValue>,
}

impl Row {
    /// Create a row with no field values attached
    pub fn new(node: ResourceNode) -> Self {
        Self {
            node,
            values: HashMap::new(),
        }
    }

    /// The value for a column, `Missing` when the store attached none
    pub fn value(&self, name: &str) -> &FieldValue {
        self.values.get(name).unwrap_or(&FieldValue::Missing)
    }

    /// Set a column value, replacing any previous one
    pub fn set_value(&mut self, name: impl Into<String>, value: FieldValue) {
        self.values.insert(name.into(), value);
    }
}
