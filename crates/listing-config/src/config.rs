//! Resolved listing configuration
//!
//! `ListingConfig` is what `ConfigResolver::resolve` hands back: the
//! built-in defaults with one fragment merged over them, columns in
//! their final display order, localization flattened in. Configs are
//! built fresh per resolution and never mutated afterwards.
//!
//! Hooks (`query`, `prepare`, per-column `renderer`) are stored as
//! NAMES and resolved through [`HookRegistry`](crate::HookRegistry),
//! so a config remains plain serializable data.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A column in its resolved form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name; also the field name fetched from the store
    pub name: String,
    /// Display caption, already localized
    pub caption: String,
    /// Declared sort priority, when the source specified one
    pub sort: Option<i64>,
    /// Resolved position key; total across all columns
    pub order: i64,
    /// Renderer hook name, if the column has a custom renderer
    pub renderer: Option<String>,
}

/// A fully merged, normalized listing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// The listing id this config was resolved FOR: always the
    /// requested id, regardless of what the source fragment declares
    pub id: String,
    /// Columns in display order
    pub columns: Vec<Column>,
    /// Enabled bulk-action names
    pub actions: Vec<String>,
    /// Allowed page-size selections
    pub limits: Vec<usize>,
    /// Page size used when the request selects none
    pub default_limit: usize,
    /// Whether the bulk-action UI should be shown
    pub show_actions: bool,
    /// Query-narrowing hook name
    pub query: Option<String>,
    /// Per-row prepare hook name
    pub prepare: Option<String>,
    /// Merged localization messages
    pub lang: HashMap<String, String>,
}

impl ListingConfig {
    /// Column names in display order
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether a bulk action is enabled for this listing
    pub fn allows_action(&self, name: &str) -> bool {
        self.actions.iter().any(|a| a == name)
    }

    /// A localized message, falling back to the key itself
    pub fn message<'a>(&'a self, key: &'a str) -> &'a str {
        self.lang.get(key).map(String::as_str).unwrap_or(key)
    }

    /// The effective page size for a request
    ///
    /// A requested size is honored only when it appears in `limits`;
    /// anything else falls back to `default_limit`.
    pub fn page_size(&self, requested: Option<usize>) -> usize {
        match requested {
            Some(limit) if self.limits.contains(&limit) => limit,
            _ => self.default_limit,
        }
    }
}
