//! Storage brokers
//!
//! [`PgStorageBroker`] persists to PostgreSQL; [`InMemoryStorageBroker`]
//! keeps everything in process. Both implement `StorageBroker` for all
//! seven entities.

pub mod error;
mod memory;
mod postgres;

pub use error::map_storage_error;
pub use memory::InMemoryStorageBroker;
pub use postgres::PgStorageBroker;
