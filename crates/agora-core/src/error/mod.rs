//! Error types for the domain layer

mod broker_error;
mod foundation_error;
mod violation;

pub use broker_error::{ClockError, FailureCategory, Severity, StorageError, StorageResult};
pub use foundation_error::{
    BrokerFault, DependencyFailure, DependencyValidationFailure, FoundationError,
    FoundationResult, ServiceFailure, ValidationFailure,
};
pub use violation::{ValidationViolation, Violations};
