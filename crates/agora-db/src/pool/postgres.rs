//! PostgreSQL connection pool management

use std::path::Path;
use std::time::Duration;

use agora_common::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, instrument};

/// Directory holding the bundled migrations
const DEFAULT_MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Timeouts applied on top of [`DatabaseConfig`]
#[derive(Debug, Clone)]
pub struct PoolOptions {
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
    /// Maximum idle time before a connection is closed
    pub idle_timeout: Duration,
    /// Maximum lifetime of a connection
    pub max_lifetime: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

/// Create a new PostgreSQL connection pool
#[instrument(skip_all, fields(max_connections = config.max_connections))]
pub async fn create_pool(config: &DatabaseConfig, options: &PoolOptions) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(options.acquire_timeout)
        .idle_timeout(options.idle_timeout)
        .max_lifetime(options.max_lifetime)
        .connect(&config.url)
        .await?;

    info!("Database pool created");
    Ok(pool)
}

/// Apply pending migrations from `dir`, or from the bundled directory
pub async fn run_migrations(pool: &PgPool, dir: Option<&str>) -> Result<(), MigrateError> {
    let dir = dir.unwrap_or(DEFAULT_MIGRATIONS_DIR);
    let migrator = Migrator::new(Path::new(dir)).await?;
    migrator.run(pool).await?;

    info!(dir, migrations = migrator.iter().count(), "Migrations applied");
    Ok(())
}

/// Round-trip a trivial query to check the database is reachable
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
