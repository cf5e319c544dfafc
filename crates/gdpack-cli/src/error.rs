//! Error types for gdpack-cli.

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] gdpack_core::Error),

    #[error(transparent)]
    Project(#[from] gdpack_project::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message.
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message.
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
