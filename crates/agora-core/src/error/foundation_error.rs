//! Foundation service errors - the normalized errors callers receive
//!
//! Every failing operation produces exactly one [`FoundationError`]. Its
//! variant is the category; its source is the cause (a violation set or
//! the broker failure), kept unchanged for diagnostics.

use std::fmt::Write as _;

use thiserror::Error;
use uuid::Uuid;

use super::broker_error::{ClockError, FailureCategory, Severity, StorageError};
use super::violation::Violations;

/// Validation-engine failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// No entity was supplied, so no field can be inspected
    #[error("{entity} is null")]
    Null { entity: &'static str },

    /// One or more fields failed their rules
    #[error("Invalid {entity}. Please correct the errors and try again.")]
    Invalid {
        entity: &'static str,
        violations: Violations,
    },

    /// Nothing stored under the submitted identifier
    #[error("Couldn't find {entity} with {}", display_identifiers(.identifiers))]
    NotFound {
        entity: &'static str,
        identifiers: Vec<(&'static str, Uuid)>,
    },
}

/// Storage rejected the input because of persisted state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DependencyValidationFailure {
    #[error("{entity} with the same id already exists")]
    AlreadyExists {
        entity: &'static str,
        #[source]
        source: StorageError,
    },

    #[error("{entity} references a record that does not exist or is still referenced")]
    ForeignKeyConstraint {
        entity: &'static str,
        #[source]
        source: StorageError,
    },
}

/// Storage itself is failing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DependencyFailure {
    #[error("{entity} is locked, please try again")]
    Locked {
        entity: &'static str,
        #[source]
        source: StorageError,
    },

    #[error("Failed {entity} storage error occurred, contact support")]
    FailedStorage {
        entity: &'static str,
        #[source]
        source: StorageError,
    },
}

/// Collaborator fault that fits no other category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrokerFault {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Clock(#[from] ClockError),
}

/// Unexpected fault inside the service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed {entity} service error occurred, contact support")]
pub struct ServiceFailure {
    pub entity: &'static str,
    #[source]
    pub source: BrokerFault,
}

/// Normalized error returned by every foundation service operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoundationError {
    #[error("{entity} validation error occurred, fix the errors and try again")]
    Validation {
        entity: &'static str,
        #[source]
        source: ValidationFailure,
    },

    #[error("{entity} dependency validation error occurred, fix the errors and try again")]
    DependencyValidation {
        entity: &'static str,
        #[source]
        source: DependencyValidationFailure,
    },

    #[error("{entity} dependency error occurred, contact support")]
    Dependency {
        entity: &'static str,
        #[source]
        source: DependencyFailure,
    },

    #[error("{entity} service error occurred, contact support")]
    Service {
        entity: &'static str,
        #[source]
        source: ServiceFailure,
    },
}

impl FoundationError {
    /// Name of the entity the failing operation handled
    pub fn entity(&self) -> &'static str {
        match self {
            Self::Validation { entity, .. }
            | Self::DependencyValidation { entity, .. }
            | Self::Dependency { entity, .. }
            | Self::Service { entity, .. } => entity,
        }
    }

    pub fn category(&self) -> FailureCategory {
        match self {
            Self::Validation { .. } => FailureCategory::Validation,
            Self::DependencyValidation { .. } => FailureCategory::DependencyValidation,
            Self::Dependency { .. } => FailureCategory::Dependency,
            Self::Service { .. } => FailureCategory::Service,
        }
    }

    /// Severity the error must be logged at
    pub fn severity(&self) -> Severity {
        match self {
            Self::Dependency {
                source: DependencyFailure::FailedStorage { source, .. },
                ..
            } => source.severity(),
            _ => Severity::Error,
        }
    }

    /// Field violations, when the cause is an invalid entity
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Validation {
                source: ValidationFailure::Invalid { violations, .. },
                ..
            } => Some(violations),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Validation {
                source: ValidationFailure::NotFound { .. },
                ..
            }
        )
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            Self::DependencyValidation {
                source: DependencyValidationFailure::AlreadyExists { .. },
                ..
            }
        )
    }

    pub fn is_locked(&self) -> bool {
        matches!(
            self,
            Self::Dependency {
                source: DependencyFailure::Locked { .. },
                ..
            }
        )
    }
}

/// Result type for foundation service operations
pub type FoundationResult<T> = Result<T, FoundationError>;

fn display_identifiers(identifiers: &[(&'static str, Uuid)]) -> String {
    let mut out = String::new();
    for (index, (field, value)) in identifiers.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{field}: {value}");
    }
    out
}
