//! Application error types
//!
//! Failures of the process itself (startup, configuration, binding).
//! Request-level failures are `FoundationError`s and never pass through here.

use crate::config::ConfigError;

/// Process-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Internal error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Create a database error from any displayable failure
    pub fn database(err: impl std::fmt::Display) -> Self {
        Self::Database(err.to_string())
    }

    /// Create a server error from any displayable failure
    pub fn server(err: impl std::fmt::Display) -> Self {
        Self::Server(err.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Process exit code for this failure
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 78,
            Self::Database(_) => 69,
            Self::Server(_) | Self::Internal(_) => 1,
        }
    }
}

/// Result type alias for process-level operations
pub type AppResult<T> = Result<T, AppError>;
