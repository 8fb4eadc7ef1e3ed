//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub storage: &'static str,
    pub storage_healthy: bool,
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness check
///
/// GET /health/ready
///
/// The in-memory store is always ready; PostgreSQL must answer a ping.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let (storage, healthy) = match state.pool() {
        Some(pool) => match agora_db::ping(pool).await {
            Ok(()) => ("postgres", true),
            Err(e) => {
                warn!(error = %e, "Database ping failed");
                ("postgres", false)
            }
        },
        None => ("memory", true),
    };

    let (status, label) = if healthy {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    };

    (
        status,
        Json(ReadinessResponse {
            status: label,
            storage,
            storage_healthy: healthy,
        }),
    )
}
