//! Bulk actions over a selected set of resources
//!
//! The action set is fixed and flat; every action is an idempotent
//! bulk mutation. Unknown names are rejected before anything is
//! touched. Validating against `config.actions` is the caller's
//! job, but the dispatcher never executes outside the fixed set.

use crate::{Error, Result};
use listing_model::{Duplicator, ResourceStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// The fixed bulk-action set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Set published on all targets
    Publish,
    /// Clear published on all targets
    Unpublish,
    /// Soft-delete all targets
    Delete,
    /// Clear the soft-delete flag on all targets
    Restore,
    /// Duplicate each target through the duplication service
    Duplicate,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Publish,
        Action::Unpublish,
        Action::Delete,
        Action::Restore,
        Action::Duplicate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Publish => "publish",
            Action::Unpublish => "unpublish",
            Action::Delete => "delete",
            Action::Restore => "restore",
            Action::Duplicate => "duplicate",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "publish" => Ok(Action::Publish),
            "unpublish" => Ok(Action::Unpublish),
            "delete" => Ok(Action::Delete),
            "restore" => Ok(Action::Restore),
            "duplicate" => Ok(Action::Duplicate),
            _ => Err(Error::InvalidAction {
                name: name.to_string(),
            }),
        }
    }
}

/// Applies bulk actions through the store and duplication service
pub struct ActionDispatcher {
    store: Arc<dyn ResourceStore>,
    duplicator: Arc<dyn Duplicator>,
}

impl ActionDispatcher {
    pub fn new(store: Arc<dyn ResourceStore>, duplicator: Arc<dyn Duplicator>) -> Self {
        Self { store, duplicator }
    }

    /// Apply an action to all targets
    ///
    /// State mutations are single bulk calls to the store.
    /// Duplication runs per target and fails fast: the first failing
    /// target aborts the invocation with its error, so no remaining
    /// target is silently skipped.
    pub fn apply(&self, action: Action, ids: &[i64]) -> Result<()> {
        tracing::debug!(%action, targets = ids.len(), "Dispatching bulk action");
        match action {
            Action::Publish => self.store.set_published(ids, true)?,
            Action::Unpublish => self.store.set_published(ids, false)?,
            Action::Delete => self.store.set_deleted(ids, true)?,
            Action::Restore => self.store.set_deleted(ids, false)?,
            Action::Duplicate => {
                for &id in ids {
                    self.duplicator.duplicate(id)?;
                }
            }
        }
        Ok(())
    }

    /// Parse a raw action name and apply it
    ///
    /// Rejects names outside the fixed set with
    /// [`Error::InvalidAction`] before any mutation.
    pub fn apply_named(&self, name: &str, ids: &[i64]) -> Result<()> {
        self.apply(name.parse()?, ids)
    }
}
