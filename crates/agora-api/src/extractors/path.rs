//! Path parameter extractors
//!
//! Identifiers are UUIDs; composite keys take one path segment per component.

use agora_core::{GroupPostId, PostImpressionId};
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use crate::response::ApiError;

/// Path parameters whose rejection is an `INVALID_PATH_PARAMETER` error
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(ApiPath(inner))
    }
}

/// `/groupposts/:group_id/:post_id`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GroupPostPath {
    pub group_id: Uuid,
    pub post_id: Uuid,
}

impl From<GroupPostPath> for GroupPostId {
    fn from(path: GroupPostPath) -> Self {
        GroupPostId::new(path.group_id, path.post_id)
    }
}

/// `/postimpressions/:post_id/:profile_id`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PostImpressionPath {
    pub post_id: Uuid,
    pub profile_id: Uuid,
}

impl From<PostImpressionPath> for PostImpressionId {
    fn from(path: PostImpressionPath) -> Self {
        PostImpressionId::new(path.post_id, path.profile_id)
    }
}
