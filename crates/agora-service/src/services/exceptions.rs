//! Exception mapper
//!
//! Converts whatever an operation raised into one [`FoundationError`] and
//! logs it exactly once, at the severity the error carries.

use std::future::Future;
use std::sync::Arc;

use agora_core::{
    BrokerFault, ClockError, DependencyFailure, DependencyValidationFailure, FailureCategory,
    FoundationError, FoundationResult, LoggingBroker, ServiceFailure, Severity, StorageError,
    ValidationFailure,
};

/// Raw failure produced inside an operation, before classification
#[derive(Debug)]
pub enum Failure {
    Validation(ValidationFailure),
    Storage(StorageError),
    Clock(ClockError),
}

impl From<ValidationFailure> for Failure {
    fn from(failure: ValidationFailure) -> Self {
        Self::Validation(failure)
    }
}

impl From<StorageError> for Failure {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ClockError> for Failure {
    fn from(error: ClockError) -> Self {
        Self::Clock(error)
    }
}

/// Classify a raw failure for the named entity
pub fn classify(entity: &'static str, failure: Failure) -> FoundationError {
    match failure {
        Failure::Validation(source) => FoundationError::Validation { entity, source },
        Failure::Storage(source) => classify_storage(entity, source),
        Failure::Clock(error) => service_failure(entity, BrokerFault::Clock(error)),
    }
}

fn classify_storage(entity: &'static str, source: StorageError) -> FoundationError {
    match source.category() {
        FailureCategory::DependencyValidation => {
            let source = match source {
                StorageError::DuplicateKey { .. } => {
                    DependencyValidationFailure::AlreadyExists { entity, source }
                }
                _ => DependencyValidationFailure::ForeignKeyConstraint { entity, source },
            };
            FoundationError::DependencyValidation { entity, source }
        }
        FailureCategory::Dependency => {
            let source = match source {
                StorageError::ConcurrencyConflict { .. } => {
                    DependencyFailure::Locked { entity, source }
                }
                _ => DependencyFailure::FailedStorage { entity, source },
            };
            FoundationError::Dependency { entity, source }
        }
        // Storage never reports a validation category; anything else is unexpected.
        FailureCategory::Validation | FailureCategory::Service => {
            service_failure(entity, BrokerFault::Storage(source))
        }
    }
}

fn service_failure(entity: &'static str, fault: BrokerFault) -> FoundationError {
    FoundationError::Service {
        entity,
        source: ServiceFailure {
            entity,
            source: fault,
        },
    }
}

/// Classifies and logs failures for one entity's service
#[derive(Clone)]
pub struct ExceptionMapper {
    entity: &'static str,
    logging_broker: Arc<dyn LoggingBroker>,
}

impl ExceptionMapper {
    pub fn new(entity: &'static str, logging_broker: Arc<dyn LoggingBroker>) -> Self {
        Self {
            entity,
            logging_broker,
        }
    }

    /// Run an operation, turning its failure into a logged [`FoundationError`]
    pub async fn try_catch<T, F>(&self, operation: F) -> FoundationResult<T>
    where
        F: Future<Output = Result<T, Failure>>,
    {
        operation.await.map_err(|failure| {
            let error = classify(self.entity, failure);
            self.log(&error);
            error
        })
    }

    fn log(&self, error: &FoundationError) {
        match error.severity() {
            Severity::Critical => self.logging_broker.log_critical(error),
            Severity::Error => self.logging_broker.log_error(error),
            Severity::Warning => self.logging_broker.log_warning(error),
        }
    }
}
