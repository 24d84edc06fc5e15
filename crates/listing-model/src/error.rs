//! Error types for listing-model

/// Result type for listing-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the external collaborators
///
/// The listing engine adds no retry logic; store and field-definition
/// failures propagate to the caller unmodified.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The resource store failed to execute a query or mutation
    #[error("Store error: {message}")]
    Store { message: String },

    /// The template-variable subsystem failed a lookup or decode
    #[error("Field definition error for {field}: {message}")]
    Field { field: String, message: String },

    /// Duplication of a resource failed
    #[error("Duplication failed for resource {id}: {message}")]
    Duplicate { id: i64, message: String },
}

impl Error {
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn duplicate(id: i64, message: impl Into<String>) -> Self {
        Self::Duplicate {
            id,
            message: message.into(),
        }
    }
}
