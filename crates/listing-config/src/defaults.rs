//! Built-in default configuration
//!
//! Every resolved config starts from this fragment; a listing's own
//! fragment overrides it key by key. The defaults mirror a bare admin
//! listing: a single title column with the stock link renderer, the
//! full bulk-action set, and the standard page-size choices.

use crate::fragment::{Fragment, FragmentColumn};

/// Renderer hook name the default title column refers to
pub const TITLE_RENDERER: &str = "title_link";

/// The full bulk-action set, in display order
pub const DEFAULT_ACTIONS: [&str; 5] = ["publish", "unpublish", "delete", "restore", "duplicate"];

/// The default config as a fragment
///
/// `default_limit` is 20, the page size the engine always used,
/// now carried in config so listings can override it.
pub fn default_fragment() -> Fragment {
    Fragment {
        ids: Vec::new(),
        columns: vec![FragmentColumn {
            name: "pagetitle".to_string(),
            caption: None,
            sort: Some(0),
            renderer: Some(TITLE_RENDERER.to_string()),
        }],
        actions: Some(DEFAULT_ACTIONS.iter().map(|a| a.to_string()).collect()),
        limits: Some(vec![10, 25, 50, 100]),
        default_limit: Some(20),
        show_actions: Some(true),
        query: None,
        prepare: None,
        lang: Default::default(),
    }
}
