//! Configuration resolution
//!
//! `ConfigResolver` turns a listing id into a fully merged
//! `ListingConfig`: built-in defaults, overridden by the listing's
//! fragment, localization merged from the message catalog, columns
//! normalized into a total display order, and the config stamped with
//! the REQUESTED id.

use crate::config::{Column, ListingConfig};
use crate::defaults;
use crate::fragment::{Fragment, FragmentColumn};
use crate::store::ConfigStore;
use listing_model::Messages;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// Namespace the default messages are fetched under
pub const MESSAGE_NAMESPACE: &str = "listing";

/// Resolves listing ids into merged, normalized configurations
pub struct ConfigResolver {
    store: Arc<ConfigStore>,
    messages: Arc<dyn Messages>,
}

impl ConfigResolver {
    /// Create a resolver over a discovered store and a message catalog
    pub fn new(store: Arc<ConfigStore>, messages: Arc<dyn Messages>) -> Self {
        Self { store, messages }
    }

    /// Resolve the configuration for a listing id
    ///
    /// Returns `None`, never an error, when no fragment is
    /// registered for the id, so callers can render a not-found state.
    ///
    /// Merge rules:
    /// - columns: defaults first; a fragment column with the same name
    ///   replaces the default entry in place; fragment-only columns are
    ///   appended in declared order
    /// - every other key: shallow override, fragment wins when present
    /// - `lang`: fragment entries merged over the `listing` namespace
    ///   from the message catalog, fragment wins on collision
    /// - `id`: always the requested id, even for multi-id fragments
    pub fn resolve(&self, id: &str) -> Option<ListingConfig> {
        let fragment = self.store.get(id)?;
        let default = defaults::default_fragment();

        let mut lang = self.messages.namespace(MESSAGE_NAMESPACE);
        lang.extend(fragment.lang.clone());

        let columns = resolve_columns(&default, fragment, &lang);

        tracing::debug!(id, columns = columns.len(), "Resolved listing config");

        Some(ListingConfig {
            id: id.to_string(),
            columns,
            actions: fragment.actions.clone().or(default.actions).unwrap_or_default(),
            limits: fragment.limits.clone().or(default.limits).unwrap_or_default(),
            default_limit: fragment.default_limit.or(default.default_limit).unwrap_or(20),
            show_actions: fragment.show_actions.or(default.show_actions).unwrap_or(true),
            query: fragment.query.clone().or(default.query),
            prepare: fragment.prepare.clone().or(default.prepare),
            lang,
        })
    }
}

/// Merge default and fragment columns, assign a total order, and sort
///
/// Order assignment walks the merged list in merge order: a declared
/// `sort` is taken as-is; a column without one receives the smallest
/// non-negative value not already taken by a declared sort or an
/// earlier implicit assignment. The final list is stable-sorted by
/// order ascending, so ties keep their merge order.
fn resolve_columns(
    default: &Fragment,
    fragment: &Fragment,
    lang: &HashMap<String, String>,
) -> Vec<Column> {
    let mut merged: Vec<FragmentColumn> = default.columns.clone();
    for column in &fragment.columns {
        if let Some(existing) = merged.iter_mut().find(|c| c.name == column.name) {
            *existing = column.clone();
        } else {
            merged.push(column.clone());
        }
    }

    let mut taken: BTreeSet<i64> = merged.iter().filter_map(|c| c.sort).collect();
    let mut next: i64 = 0;

    let mut columns: Vec<Column> = merged
        .into_iter()
        .map(|column| {
            let order = match column.sort {
                Some(sort) => sort,
                None => {
                    while taken.contains(&next) {
                        next += 1;
                    }
                    taken.insert(next);
                    next
                }
            };
            let caption = column
                .caption
                .or_else(|| lang.get(&column.name).cloned())
                .unwrap_or_else(|| column.name.clone());
            Column {
                name: column.name,
                caption,
                sort: column.sort,
                order,
                renderer: column.renderer,
            }
        })
        .collect();

    columns.sort_by_key(|c| c.order);
    columns
}
