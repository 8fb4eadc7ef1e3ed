//! Foundation service
//!
//! One generic service handles every entity: it validates the input,
//! talks to the storage broker, and hands any failure to the exception
//! mapper. Entity-specific behavior lives in the [`Entity`] impl.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use agora_core::{DateTimeBroker, Entity, FoundationResult, LoggingBroker, StorageBroker};
use tracing::instrument;

use super::exceptions::{ExceptionMapper, Failure};
use super::validation::ValidationEngine;

/// Add, modify, retrieve and remove one kind of entity
pub struct FoundationService<E: Entity> {
    storage_broker: Arc<dyn StorageBroker<E>>,
    date_time_broker: Arc<dyn DateTimeBroker>,
    exception_mapper: ExceptionMapper,
    validation: ValidationEngine,
}

impl<E: Entity> FoundationService<E> {
    pub fn new(
        storage_broker: Arc<dyn StorageBroker<E>>,
        date_time_broker: Arc<dyn DateTimeBroker>,
        logging_broker: Arc<dyn LoggingBroker>,
        recency_window: Duration,
    ) -> Self {
        Self {
            storage_broker,
            date_time_broker,
            exception_mapper: ExceptionMapper::new(E::NAME, logging_broker),
            validation: ValidationEngine::new(recency_window),
        }
    }

    /// Validate and insert a new entity
    #[instrument(skip_all, fields(entity = E::NAME))]
    pub async fn add(&self, entity: impl Into<Option<E>> + Send) -> FoundationResult<E> {
        let entity = entity.into();
        self.exception_mapper.try_catch(self.try_add(entity)).await
    }

    /// Every stored entity, in storage order
    #[instrument(skip_all, fields(entity = E::NAME))]
    pub async fn retrieve_all(&self) -> FoundationResult<Vec<E>> {
        self.exception_mapper.try_catch(self.try_retrieve_all()).await
    }

    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn retrieve_by_id(&self, id: E::Id) -> FoundationResult<E> {
        self.exception_mapper.try_catch(self.try_retrieve_by_id(id)).await
    }

    /// Validate a modification, compare it with the stored record, then update
    #[instrument(skip_all, fields(entity = E::NAME))]
    pub async fn modify(&self, entity: impl Into<Option<E>> + Send) -> FoundationResult<E> {
        let entity = entity.into();
        self.exception_mapper.try_catch(self.try_modify(entity)).await
    }

    /// Delete the stored record and return it
    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn remove_by_id(&self, id: E::Id) -> FoundationResult<E> {
        self.exception_mapper.try_catch(self.try_remove_by_id(id)).await
    }

    async fn try_add(&self, entity: Option<E>) -> Result<E, Failure> {
        // A missing entity fails before the clock is consulted.
        let entity = self.validation.ensure_present(entity)?;
        let now = self.date_time_broker.current_date_time()?;
        self.validation.validate_on_add(&entity, now)?;

        Ok(self.storage_broker.insert(&entity).await?)
    }

    async fn try_retrieve_all(&self) -> Result<Vec<E>, Failure> {
        Ok(self.storage_broker.select_all().await?)
    }

    async fn try_retrieve_by_id(&self, id: E::Id) -> Result<E, Failure> {
        self.validation.validate_id::<E>(&id)?;
        let stored = self.storage_broker.select_by_id(&id).await?;

        Ok(self.validation.ensure_found(stored, &id)?)
    }

    async fn try_modify(&self, entity: Option<E>) -> Result<E, Failure> {
        let entity = self.validation.ensure_present(entity)?;
        let now = self.date_time_broker.current_date_time()?;
        self.validation.validate_on_modify(&entity, now)?;

        let id = entity.id();
        let stored = self.storage_broker.select_by_id(&id).await?;
        let stored = self.validation.ensure_found(stored, &id)?;
        self.validation.validate_against_storage(&entity, &stored)?;

        Ok(self.storage_broker.update(&entity).await?)
    }

    async fn try_remove_by_id(&self, id: E::Id) -> Result<E, Failure> {
        self.validation.validate_id::<E>(&id)?;
        let stored = self.storage_broker.select_by_id(&id).await?;
        let stored = self.validation.ensure_found(stored, &id)?;

        Ok(self.storage_broker.delete(&stored).await?)
    }
}

impl<E: Entity> fmt::Debug for FoundationService<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoundationService")
            .field("entity", &E::NAME)
            .field("recency_window", &self.validation.recency_window())
            .finish_non_exhaustive()
    }
}
