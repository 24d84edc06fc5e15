//! Listing configuration discovery, merging and normalization
//!
//! A listing is described by TOML fragments discovered from a
//! directory. This crate provides:
//!
//! - **Fragment**: one parsed config file, declaring the listing ids
//!   it applies to
//! - **ConfigStore**: the one-shot discovery scan and per-id index
//! - **ConfigResolver**: defaults + fragment merge, localization
//!   merge, total column ordering, id stamping
//! - **HookRegistry**: named `query`/`prepare`/`renderer` callables
//!   that configs reference by string, keeping config data
//!   serializable
//!
//! The store is built once at startup and shared behind an `Arc`;
//! there is no lazy global cache to race on.

pub mod config;
pub mod defaults;
pub mod error;
pub mod fragment;
pub mod hooks;
pub mod resolver;
pub mod store;

pub use config::{Column, ListingConfig};
pub use defaults::{DEFAULT_ACTIONS, TITLE_RENDERER, default_fragment};
pub use error::{Error, Result};
pub use fragment::{Fragment, FragmentColumn};
pub use hooks::{HookRegistry, PrepareHook, QueryHook, RendererHook};
pub use resolver::{ConfigResolver, MESSAGE_NAMESPACE};
pub use store::ConfigStore;
