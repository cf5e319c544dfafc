//! Error types for project and addon parsing.

use std::path::PathBuf;

/// Result type for gdpack-project operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing project artifacts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No Godot project was found where one is required.
    #[error("no Godot project found at \"{path}\" or any of its parent directories")]
    NoProject { path: PathBuf },

    /// A declared dependency has no addon name, so it cannot be keyed.
    #[error("dependency '{locator}' in {file} has no addon name")]
    UnnamedDependency { locator: String, file: PathBuf },

    /// A dependency entry failed to parse as a locator.
    #[error(transparent)]
    Locator(#[from] gdpack_core::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
