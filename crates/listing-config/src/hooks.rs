//! Named hook registry
//!
//! Configs reference hooks by name so they stay plain data; the
//! actual callables live here. Three hook points exist:
//!
//! - `query`: narrows the composed query before filters run
//! - `prepare`: reshapes a row before the option transform; returning
//!   `None` drops the row from the page
//! - `renderer`: turns a cell value into a display fragment; the
//!   engine does not interpret the output
//!
//! A hook name configured without a matching registration is skipped
//! with a warning, the same availability bias malformed fragments get.

use crate::config::ListingConfig;
use listing_model::{FieldValue, ResourceQuery, Row};
use std::collections::HashMap;
use std::fmt;

/// Query-narrowing hook
pub type QueryHook = Box<dyn Fn(&mut ResourceQuery) + Send + Sync>;

/// Per-row prepare hook; `None` drops the row
pub type PrepareHook = Box<dyn Fn(Row, &ListingConfig) -> Option<Row> + Send + Sync>;

/// Per-cell renderer hook
pub type RendererHook = Box<dyn Fn(&FieldValue, &Row, &ListingConfig) -> String + Send + Sync>;

/// String-keyed registry for the three hook points
#[derive(Default)]
pub struct HookRegistry {
    query: HashMap<String, QueryHook>,
    prepare: HashMap<String, PrepareHook>,
    renderer: HashMap<String, RendererHook>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a query hook; replaces any previous hook of that name
    pub fn register_query(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn(&mut ResourceQuery) + Send + Sync + 'static,
    ) {
        self.query.insert(name.into(), Box::new(hook));
    }

    /// Register a prepare hook; replaces any previous hook of that name
    pub fn register_prepare(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn(Row, &ListingConfig) -> Option<Row> + Send + Sync + 'static,
    ) {
        self.prepare.insert(name.into(), Box::new(hook));
    }

    /// Register a renderer hook; replaces any previous hook of that name
    pub fn register_renderer(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn(&FieldValue, &Row, &ListingConfig) -> String + Send + Sync + 'static,
    ) {
        self.renderer.insert(name.into(), Box::new(hook));
    }

    pub fn query(&self, name: &str) -> Option<&QueryHook> {
        self.query.get(name)
    }

    pub fn prepare(&self, name: &str) -> Option<&PrepareHook> {
        self.prepare.get(name)
    }

    pub fn renderer(&self, name: &str) -> Option<&RendererHook> {
        self.renderer.get(name)
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("query", &self.query.keys().collect::<Vec<_>>())
            .field("prepare", &self.prepare.keys().collect::<Vec<_>>())
            .field("renderer", &self.renderer.keys().collect::<Vec<_>>())
            .finish()
    }
}
