//! Configuration fragment parsing
//!
//! A fragment is one TOML file describing a listing. A fragment
//! declares every listing id it applies to. Fragments are
//! partial: anything left out inherits from the built-in defaults
//! during resolution.
//!
//! ```text
//! ids = ["12", "blog"]
//! default_limit = 50
//! query = "published_only"
//!
//! [[columns]]
//! name = "pagetitle"
//! sort = 0
//! renderer = "title_link"
//!
//! [[columns]]
//! name = "tags"
//! caption = "Tags"
//!
//! [lang]
//! edit_document = "Edit document"
//! ```

use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One column declaration inside a fragment
///
/// Columns are declared as an ordered array so the merge order,
/// and with it the implicit order assignment, is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentColumn {
    /// Column name; also the field name fetched from the store
    pub name: String,
    /// Display caption; falls back to the lang entry for `name`
    pub caption: Option<String>,
    /// Declared sort priority; columns without one are slotted into
    /// the unused positions during resolution
    pub sort: Option<i64>,
    /// Renderer hook name, resolved through the hook registry
    pub renderer: Option<String>,
}

impl FragmentColumn {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            caption: None,
            sort: None,
            renderer: None,
        }
    }
}

/// A parsed configuration fragment
///
/// `ids` is the only required key; a fragment with no parseable id
/// list is skipped at discovery time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Listing ids this fragment applies to
    #[serde(default)]
    pub ids: Vec<String>,

    /// Column declarations, in display-merge order
    #[serde(default)]
    pub columns: Vec<FragmentColumn>,

    /// Enabled bulk-action names; inherits the default set when absent
    pub actions: Option<Vec<String>>,

    /// Allowed page-size selections
    pub limits: Option<Vec<usize>>,

    /// Page size used when the request selects none
    pub default_limit: Option<usize>,

    /// Whether the bulk-action UI should be shown
    pub show_actions: Option<bool>,

    /// Query-narrowing hook name
    pub query: Option<String>,

    /// Per-row prepare hook name
    pub prepare: Option<String>,

    /// Localized messages, merged over the namespace defaults
    #[serde(default)]
    pub lang: HashMap<String, String>,
}

impl Fragment {
    /// Parse a fragment from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let fragment: Fragment = toml::from_str(content)?;
        Ok(fragment)
    }
}
