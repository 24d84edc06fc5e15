//! Error types for listing-config

use std::path::PathBuf;

/// Result type for listing-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while discovering configuration fragments
///
/// Note that a fragment that fails to parse is NOT an error at the
/// store level; it is skipped with a warning so one broken file
/// cannot take every listing down. Only I/O failures on the fragment
/// directory itself surface here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The fragment directory could not be read
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fragment failed to parse as TOML
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
