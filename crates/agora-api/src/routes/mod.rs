//! Route definitions
//!
//! Entity routes are mounted under /api/v1; health checks sit at the root.

use agora_core::{Comment, Group, GroupMembership, GroupPost, Post, PostImpression, Profile};
use axum::{routing::get, Router};

use crate::handlers::{
    health,
    resources::{self, Resource},
};
use crate::state::AppState;

/// Create the main API router with all entity routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(resource_routes::<Post>("/posts", "/posts/:id"))
        .merge(resource_routes::<Group>("/groups", "/groups/:id"))
        .merge(resource_routes::<GroupPost>(
            "/groupposts",
            "/groupposts/:group_id/:post_id",
        ))
        .merge(resource_routes::<Comment>("/comments", "/comments/:id"))
        .merge(resource_routes::<Profile>("/profiles", "/profiles/:id"))
        .merge(resource_routes::<GroupMembership>(
            "/groupmemberships",
            "/groupmemberships/:id",
        ))
        .merge(resource_routes::<PostImpression>(
            "/postimpressions",
            "/postimpressions/:post_id/:profile_id",
        ))
}

/// Collection and item routes for one entity
fn resource_routes<E: Resource>(collection: &str, item: &str) -> Router<AppState> {
    Router::new()
        .route(
            collection,
            get(resources::list::<E>)
                .post(resources::create::<E>)
                .put(resources::modify::<E>),
        )
        .route(
            item,
            get(resources::retrieve::<E>).delete(resources::remove::<E>),
        )
}
