//! Static message catalog

use listing_model::Messages;
use std::collections::HashMap;

/// A fixed, in-memory message catalog
#[derive(Debug, Default)]
pub struct StaticMessages {
    namespaces: HashMap<String, HashMap<String, String>>,
}

impl StaticMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog carrying the stock `listing` namespace used across
    /// the workspace tests
    pub fn with_defaults() -> Self {
        let mut messages = Self::new();
        messages.set("listing", "pagetitle", "Title");
        messages.set("listing", "edit_document", "Edit document");
        messages.set("listing", "no_results", "No documents found");
        messages
    }

    /// Set one message under a namespace
    pub fn set(
        &mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .insert(key.into(), value.into());
    }
}

impl Messages for StaticMessages {
    fn namespace(&self, namespace: &str) -> HashMap<String, String> {
        self.namespaces.get(namespace).cloned().unwrap_or_default()
    }
}
