//! # agora-db
//!
//! Storage layer implementing the `StorageBroker` port for every entity.
//!
//! ## Overview
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers
//! - PostgreSQL and in-memory storage brokers
//! - Classification of driver errors into `StorageError`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agora_db::{create_pool, PgStorageBroker, PoolOptions};
//!
//! async fn example(config: &agora_common::DatabaseConfig) -> Result<(), sqlx::Error> {
//!     let pool = create_pool(config, &PoolOptions::default()).await?;
//!     let storage = PgStorageBroker::new(pool);
//!     // Hand the broker to the service context...
//!     Ok(())
//! }
//! ```

pub mod brokers;
pub mod mappers;
pub mod models;
pub mod pool;

pub use brokers::{map_storage_error, InMemoryStorageBroker, PgStorageBroker};
pub use pool::{create_pool, ping, run_migrations, PgPool, PoolOptions};
