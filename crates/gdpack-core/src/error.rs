//! Error types for the resolution engine.

use std::path::PathBuf;

use crate::reconcile::ConflictError;

/// Result type for gdpack-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or installing dependencies.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A locator string does not match the `[name@]source[@version]` grammar.
    #[error("malformed locator '{input}': {reason}")]
    MalformedLocator { input: String, reason: String },

    /// A fetched artifact does not contain the addon named by a locator.
    /// Fatal: a broken locator is not retryable.
    #[error("addon '{name}' not found in artifact fetched from '{src}'")]
    MissingAddon { name: String, src: String },

    /// A directory was expected to hold an artifact but could not be read as
    /// one. Raised only where an artifact is required (e.g. during install);
    /// during graph traversal the same condition is recoverable.
    #[error("not a recognizable artifact: {path}")]
    NotAnArtifact { path: PathBuf },

    /// A source exports no addon, so a default cannot be chosen.
    #[error("no addons exported by '{src}', cannot determine a default")]
    NoDefaultAddon { src: String },

    /// A source exports several addons without an explicit choice.
    #[error("multiple addons exported by '{src}' ({candidates:?}), specify one explicitly")]
    AmbiguousDefaultAddon {
        src: String,
        candidates: Vec<String>,
    },

    /// `remove` was asked for a name that is neither a declared dependency
    /// nor an addon present on disk.
    #[error("'{name}' is not a dependency of this project")]
    UnknownDependency { name: String },

    /// Incompatible requirements discovered while flattening the graph.
    #[error(transparent)]
    Conflicts(#[from] ConflictError),

    /// The user declined a confirmation that the operation requires.
    #[error("operation cancelled: {prompt}")]
    Declined { prompt: String },

    /// I/O error from the manager's own disk operations.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure inside a collaborator (storage, artifact loading, prompts).
    #[error(transparent)]
    Collaborator(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a collaborator error so it can cross the trait seam.
    pub fn collaborator(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Collaborator(Box::new(source))
    }
}
