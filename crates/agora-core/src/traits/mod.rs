//! Traits shared across layers: the entity shape and the broker ports

mod brokers;
mod entity;

pub use brokers::{DateTimeBroker, LoggingBroker, StorageBroker};
pub use entity::{Entity, EntityId, FieldRule, ID_REQUIRED, TEXT_REQUIRED, VALUE_REQUIRED};
