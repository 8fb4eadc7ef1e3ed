//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use agora_common::{AppConfig, AppError};
use agora_core::{DateTimeBroker, LoggingBroker};
use agora_db::{
    create_pool, run_migrations, InMemoryStorageBroker, PgPool, PgStorageBroker, PoolOptions,
};
use agora_service::{
    ServiceContext, ServiceContextBuilder, SocialStorageBroker, SystemDateTimeBroker,
    TracingLoggingBroker,
};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());
    router.with_state(state)
}

/// Initialize storage and services and create AppState
///
/// PostgreSQL is used when a database is configured; otherwise records
/// live in memory for the lifetime of the process.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    match &config.database {
        Some(database) => {
            info!("Connecting to PostgreSQL...");
            let pool = create_pool(database, &PoolOptions::default())
                .await
                .map_err(AppError::database)?;
            info!("PostgreSQL connection established");

            run_migrations(&pool, database.migrations_dir.as_deref())
                .await
                .map_err(AppError::database)?;

            let storage = Arc::new(PgStorageBroker::new(pool.clone()));
            let service_context = build_service_context(storage, &config)?;
            Ok(AppState::new(service_context, config, Some(pool)))
        }
        None => {
            info!("DATABASE_URL not set, using in-memory storage");
            let storage = Arc::new(InMemoryStorageBroker::new());
            let service_context = build_service_context(storage, &config)?;
            Ok(AppState::new(service_context, config, None::<PgPool>))
        }
    }
}

/// Wire the system clock and tracing logger to `storage`
pub fn build_service_context<S>(storage: Arc<S>, config: &AppConfig) -> Result<ServiceContext, AppError>
where
    S: SocialStorageBroker + 'static,
{
    let date_time_broker: Arc<dyn DateTimeBroker> = Arc::new(SystemDateTimeBroker);
    let logging_broker: Arc<dyn LoggingBroker> = Arc::new(TracingLoggingBroker);

    ServiceContextBuilder::new()
        .storage(storage)
        .date_time_broker(date_time_broker)
        .logging_broker(logging_broker)
        .recency_window(config.validation.recency_window())
        .build()
        .map_err(AppError::internal)
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::server(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::server(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::server(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
