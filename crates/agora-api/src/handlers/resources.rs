//! Entity handlers
//!
//! Every entity exposes the same five endpoints backed by its
//! [`FoundationService`]. Request and response bodies are the entity's
//! JSON form; a `null` body is passed to the service as an absent entity.

use agora_core::{
    Comment, Entity, Group, GroupMembership, GroupPost, GroupPostId, Post, PostImpression,
    PostImpressionId, Profile,
};
use agora_service::{FoundationService, ServiceContext};
use axum::{extract::State, Json};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::extractors::{ApiJson, ApiPath, GroupPostPath, PostImpressionPath};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// An entity served over HTTP
pub trait Resource: Entity + Serialize + DeserializeOwned {
    /// Path parameters naming one record
    type PathId: DeserializeOwned + Send + 'static;

    fn id_from_path(path: Self::PathId) -> Self::Id;

    /// This entity's service
    fn service(context: &ServiceContext) -> &FoundationService<Self>;
}

impl Resource for Post {
    type PathId = Uuid;

    fn id_from_path(path: Uuid) -> Uuid {
        path
    }

    fn service(context: &ServiceContext) -> &FoundationService<Self> {
        context.posts()
    }
}

impl Resource for Group {
    type PathId = Uuid;

    fn id_from_path(path: Uuid) -> Uuid {
        path
    }

    fn service(context: &ServiceContext) -> &FoundationService<Self> {
        context.groups()
    }
}

impl Resource for GroupPost {
    type PathId = GroupPostPath;

    fn id_from_path(path: GroupPostPath) -> GroupPostId {
        path.into()
    }

    fn service(context: &ServiceContext) -> &FoundationService<Self> {
        context.group_posts()
    }
}

impl Resource for Comment {
    type PathId = Uuid;

    fn id_from_path(path: Uuid) -> Uuid {
        path
    }

    fn service(context: &ServiceContext) -> &FoundationService<Self> {
        context.comments()
    }
}

impl Resource for Profile {
    type PathId = Uuid;

    fn id_from_path(path: Uuid) -> Uuid {
        path
    }

    fn service(context: &ServiceContext) -> &FoundationService<Self> {
        context.profiles()
    }
}

impl Resource for GroupMembership {
    type PathId = Uuid;

    fn id_from_path(path: Uuid) -> Uuid {
        path
    }

    fn service(context: &ServiceContext) -> &FoundationService<Self> {
        context.group_memberships()
    }
}

impl Resource for PostImpression {
    type PathId = PostImpressionPath;

    fn id_from_path(path: PostImpressionPath) -> PostImpressionId {
        path.into()
    }

    fn service(context: &ServiceContext) -> &FoundationService<Self> {
        context.post_impressions()
    }
}

/// POST /{resource}
pub async fn create<E: Resource>(
    State(state): State<AppState>,
    ApiJson(entity): ApiJson<Option<E>>,
) -> ApiResult<Created<Json<E>>> {
    let added = E::service(state.service_context()).add(entity).await?;
    Ok(Created(Json(added)))
}

/// GET /{resource}
pub async fn list<E: Resource>(State(state): State<AppState>) -> ApiResult<Json<Vec<E>>> {
    let all = E::service(state.service_context()).retrieve_all().await?;
    Ok(Json(all))
}

/// PUT /{resource}
pub async fn modify<E: Resource>(
    State(state): State<AppState>,
    ApiJson(entity): ApiJson<Option<E>>,
) -> ApiResult<Json<E>> {
    let modified = E::service(state.service_context()).modify(entity).await?;
    Ok(Json(modified))
}

/// GET /{resource}/{id}
pub async fn retrieve<E: Resource>(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<E::PathId>,
) -> ApiResult<Json<E>> {
    let found = E::service(state.service_context())
        .retrieve_by_id(E::id_from_path(path))
        .await?;
    Ok(Json(found))
}

/// DELETE /{resource}/{id}
pub async fn remove<E: Resource>(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<E::PathId>,
) -> ApiResult<Json<E>> {
    let removed = E::service(state.service_context())
        .remove_by_id(E::id_from_path(path))
        .await?;
    Ok(Json(removed))
}
