//! Broker errors - failures reported by the storage and clock collaborators
//!
//! Each storage failure carries its own category tag so callers classify it
//! with a `match`, not by inspecting the error's concrete type.

use std::fmt;

use thiserror::Error;

/// Classification of a failure, driving log severity and outward error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureCategory {
    /// The caller's input is malformed
    Validation,
    /// The caller's input conflicts with persisted state
    DependencyValidation,
    /// The storage dependency is failing
    Dependency,
    /// An unexpected internal fault
    Service,
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validation => "validation",
            Self::DependencyValidation => "dependency_validation",
            Self::Dependency => "dependency",
            Self::Service => "service",
        };
        f.write_str(name)
    }
}

/// Log severity attached to a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
    /// Storage is unreachable; pages an operator
    Critical,
}

/// Errors surfaced by a storage broker
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Unique constraint or primary key collision
    #[error("duplicate key: {message}")]
    DuplicateKey { message: String },

    /// Referential integrity violation
    #[error("foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Row lock or serialization conflict
    #[error("concurrency conflict: {message}")]
    ConcurrencyConflict { message: String },

    /// Storage engine unreachable or broken
    #[error("storage connection failed: {message}")]
    Connection { message: String },

    /// Statement reached the engine but the write was rejected
    #[error("storage write failed: {message}")]
    Write { message: String },

    /// Anything the broker could not classify
    #[error("unexpected storage failure: {message}")]
    Unexpected { message: String },
}

impl StorageError {
    pub fn duplicate_key(message: impl Into<String>) -> Self {
        Self::DuplicateKey {
            message: message.into(),
        }
    }

    pub fn foreign_key_violation(message: impl Into<String>) -> Self {
        Self::ForeignKeyViolation {
            message: message.into(),
        }
    }

    pub fn concurrency_conflict(message: impl Into<String>) -> Self {
        Self::ConcurrencyConflict {
            message: message.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Category this failure falls into
    pub fn category(&self) -> FailureCategory {
        match self {
            Self::DuplicateKey { .. } | Self::ForeignKeyViolation { .. } => {
                FailureCategory::DependencyValidation
            }
            Self::ConcurrencyConflict { .. } | Self::Connection { .. } | Self::Write { .. } => {
                FailureCategory::Dependency
            }
            Self::Unexpected { .. } => FailureCategory::Service,
        }
    }

    /// Severity this failure is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Self::Connection { .. } => Severity::Critical,
            _ => Severity::Error,
        }
    }
}

/// Error surfaced by the clock broker
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clock unavailable: {message}")]
pub struct ClockError {
    pub message: String,
}

impl ClockError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for storage broker operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_categories() {
        assert_eq!(
            StorageError::duplicate_key("pk").category(),
            FailureCategory::DependencyValidation
        );
        assert_eq!(
            StorageError::foreign_key_violation("fk").category(),
            FailureCategory::DependencyValidation
        );
        assert_eq!(
            StorageError::concurrency_conflict("lock").category(),
            FailureCategory::Dependency
        );
        assert_eq!(
            StorageError::connection("down").category(),
            FailureCategory::Dependency
        );
        assert_eq!(StorageError::write("check").category(), FailureCategory::Dependency);
        assert_eq!(StorageError::unexpected("?").category(), FailureCategory::Service);
    }

    #[test]
    fn test_only_connection_failures_are_critical() {
        assert_eq!(StorageError::connection("down").severity(), Severity::Critical);
        assert_eq!(StorageError::write("check").severity(), Severity::Error);
        assert_eq!(StorageError::concurrency_conflict("lock").severity(), Severity::Error);
        assert_eq!(StorageError::duplicate_key("pk").severity(), Severity::Error);
        assert_eq!(StorageError::unexpected("?").severity(), Severity::Error);
    }

    #[test]
    fn test_error_display() {
        let err = StorageError::connection("timed out");
        assert_eq!(err.to_string(), "storage connection failed: timed out");

        let err = ClockError::new("no time source");
        assert_eq!(err.to_string(), "clock unavailable: no time source");
    }
}
