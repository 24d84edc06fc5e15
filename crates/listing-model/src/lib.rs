//! Data model and collaborator traits for the listing engine
//!
//! This crate is the shared vocabulary of the workspace: resource
//! nodes, listing rows and their field values, the query description
//! the pipeline hands to the store, request parameters, pagination,
//! and the traits the external collaborators implement.
//!
//! It performs no I/O of its own. The workspace layers on top of it:
//!
//! ```text
//!      listing-engine
//!       /          \
//! listing-config    |
//!       \          /
//!      listing-model
//! ```

pub mod error;
pub mod node;
pub mod page;
pub mod params;
pub mod query;
pub mod store;

pub use error::{Error, Result};
pub use node::{FieldValue, ResourceNode, Row};
pub use page::Page;
pub use params::{LIMIT_PARAM, PAGE_PARAM, RequestParams};
pub use query::{Condition, Direction, Operator, OrderBy, ResourceQuery};
pub use store::{
    Duplicator, FieldDefinition, FieldKind, FieldSource, Messages, RawOption, ResourceStore,
};
