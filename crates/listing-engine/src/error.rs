//! Error types for listing-engine

/// Result type for listing-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while listing, dispatching or resolving
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Action name outside the fixed bulk-action set; rejected
    /// before any mutation
    #[error("Invalid action: {name}")]
    InvalidAction { name: String },

    /// Collaborator failure, propagated unmodified
    #[error(transparent)]
    Model(#[from] listing_model::Error),
}
