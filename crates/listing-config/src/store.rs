//! Fragment discovery and indexing
//!
//! `ConfigStore` scans a directory of `*.toml` fragments once, up
//! front, and indexes each fragment under every listing id it
//! declares. The store is immutable after construction: build it at
//! startup, wrap it in an `Arc`, and share it; the full index is
//! published in one step, so concurrent first use never observes a
//! half-populated cache.

use crate::fragment::Fragment;
use crate::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Indexed configuration fragments, keyed by listing id
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    fragments: HashMap<String, Arc<Fragment>>,
}

impl ConfigStore {
    /// Scan a directory for `*.toml` fragments and index them
    ///
    /// Files are visited in sorted filename order. A fragment that
    /// fails to read or parse, or that declares no ids, is skipped
    /// with a warning. Availability over strict validation: one
    /// broken file must not take every listing down. When two
    /// fragments declare the same id, the last one visited wins.
    ///
    /// # Errors
    ///
    /// Only when the directory itself cannot be enumerated.
    pub fn discover(dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

        let mut paths: Vec<_> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        paths.sort();

        let mut store = Self::default();
        for path in paths {
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(error) => {
                    tracing::warn!(?path, %error, "Skipping unreadable fragment");
                    continue;
                }
            };
            match Fragment::parse(&content) {
                Ok(fragment) => store.register(fragment),
                Err(error) => {
                    tracing::warn!(?path, %error, "Skipping malformed fragment");
                }
            }
        }

        tracing::debug!(ids = store.fragments.len(), "Fragment discovery complete");
        Ok(store)
    }

    /// Build a store from in-code fragments, in registration order
    ///
    /// Follows the same rules as [`discover`](Self::discover): id-less
    /// fragments are skipped, later registrations win.
    pub fn from_fragments(fragments: impl IntoIterator<Item = Fragment>) -> Self {
        let mut store = Self::default();
        for fragment in fragments {
            store.register(fragment);
        }
        store
    }

    fn register(&mut self, fragment: Fragment) {
        if fragment.ids.is_empty() {
            tracing::warn!("Skipping fragment with no listing ids");
            return;
        }
        let fragment = Arc::new(fragment);
        for id in &fragment.ids {
            self.fragments.insert(id.clone(), Arc::clone(&fragment));
        }
    }

    /// The fragment registered for a listing id, if any
    pub fn get(&self, id: &str) -> Option<&Fragment> {
        self.fragments.get(id).map(Arc::as_ref)
    }

    /// Whether any fragment is registered for a listing id
    pub fn contains(&self, id: &str) -> bool {
        self.fragments.contains_key(id)
    }

    /// All registered listing ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.fragments.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
