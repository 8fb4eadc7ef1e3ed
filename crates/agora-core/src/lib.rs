//! # agora-core
//!
//! Domain layer containing entities, broker traits, and the failure taxonomy
//! shared by every foundation service.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, Group, GroupMembership, GroupPost, GroupPostId, GroupStatus, Impression, Post,
    PostImpression, PostImpressionId, Profile,
};
pub use error::{
    BrokerFault, ClockError, DependencyFailure, DependencyValidationFailure, FailureCategory,
    FoundationError, FoundationResult, ServiceFailure, Severity, StorageError, StorageResult,
    ValidationFailure, ValidationViolation, Violations,
};
pub use traits::{DateTimeBroker, Entity, EntityId, FieldRule, LoggingBroker, StorageBroker};
