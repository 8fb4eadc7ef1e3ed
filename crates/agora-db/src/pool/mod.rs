//! Database connection pool management

mod postgres;

pub use postgres::{create_pool, ping, run_migrations, PoolOptions};
pub use sqlx::PgPool;
