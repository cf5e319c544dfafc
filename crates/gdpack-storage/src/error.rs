//! Error types for gdpack-storage.

use std::path::PathBuf;

/// Result type for gdpack-storage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching or copying addon sources.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested version matches no tag or branch of the source.
    #[error("version '{version}' not found in '{src}'")]
    UnknownVersion { src: String, version: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
