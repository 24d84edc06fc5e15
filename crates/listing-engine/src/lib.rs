//! Query pipeline, bulk actions and breadcrumbs for the listing engine
//!
//! This crate is the orchestration layer: it takes a resolved
//! [`ListingConfig`](listing_config::ListingConfig) and executes
//! listing requests against the injected collaborators.
//!
//! - **ListingPipeline**: base query over a parent's children, hook
//!   and filter narrowing, fixed ordering, pagination, per-row
//!   option-code→label transform
//! - **OptionResolver**: per-column code→label maps from the
//!   template-variable subsystem
//! - **ActionDispatcher**: the fixed bulk-action set
//!   (publish/unpublish/delete/restore/duplicate)
//! - **CrumbResolver**: root-first ancestor chains for breadcrumbs
//! - **render_cell**: the renderer-hook handoff
//!
//! ```text
//!      listing-engine
//!       /          \
//! listing-config    |
//!       \          /
//!      listing-model
//! ```

pub mod actions;
pub mod crumbs;
pub mod error;
pub mod filter;
pub mod options;
pub mod pipeline;
pub mod render;

pub use actions::{Action, ActionDispatcher};
pub use crumbs::CrumbResolver;
pub use error::{Error, Result};
pub use filter::{FieldFilter, Filter};
pub use options::{OptionMap, OptionResolver};
pub use pipeline::{LABEL_SEPARATOR, ListingPipeline, VALUE_DELIMITER};
pub use render::render_cell;
