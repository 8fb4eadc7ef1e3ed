//! Broker traits (ports) - the external collaborators a foundation service consumes
//!
//! Storage, clock, and logging are owned outside the core. Each broker
//! reports failures as values so the exception mapper can classify them
//! without inspecting thrown types.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::{ClockError, FoundationError, StorageResult};

use super::entity::Entity;

/// Persistence capability for one entity type
#[async_trait]
pub trait StorageBroker<E: Entity>: Send + Sync {
    /// Insert a new record and return what was stored
    async fn insert(&self, entity: &E) -> StorageResult<E>;

    /// List every stored record
    async fn select_all(&self) -> StorageResult<Vec<E>>;

    /// Find a record by identifier
    async fn select_by_id(&self, id: &E::Id) -> StorageResult<Option<E>>;

    /// Overwrite an existing record
    async fn update(&self, entity: &E) -> StorageResult<E>;

    /// Remove a record and return it
    async fn delete(&self, entity: &E) -> StorageResult<E>;
}

/// Clock capability
pub trait DateTimeBroker: Send + Sync {
    fn current_date_time(&self) -> Result<DateTime<Utc>, ClockError>;
}

/// Logging capability
///
/// Receives the outward error, never the raw broker failure.
pub trait LoggingBroker: Send + Sync {
    fn log_critical(&self, error: &FoundationError);

    fn log_error(&self, error: &FoundationError);

    fn log_warning(&self, error: &FoundationError);
}
