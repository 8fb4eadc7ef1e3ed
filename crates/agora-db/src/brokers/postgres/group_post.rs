//! PostgreSQL storage for GroupPost

use agora_core::{GroupPost, GroupPostId, StorageBroker, StorageResult};
use async_trait::async_trait;
use tracing::instrument;

use crate::brokers::error::{map_storage_error, row_vanished};
use crate::models::GroupPostModel;

use super::PgStorageBroker;

#[async_trait]
impl StorageBroker<GroupPost> for PgStorageBroker {
    #[instrument(skip_all, fields(group_id = %entity.group_id, post_id = %entity.post_id))]
    async fn insert(&self, entity: &GroupPost) -> StorageResult<GroupPost> {
        let model = sqlx::query_as::<_, GroupPostModel>(
            r"
            INSERT INTO group_posts (group_id, post_id, created_date, updated_date)
            VALUES ($1, $2, $3, $4)
            RETURNING group_id, post_id, created_date, updated_date
            ",
        )
        .bind(entity.group_id)
        .bind(entity.post_id)
        .bind(entity.created_date)
        .bind(entity.updated_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_storage_error)?;

        Ok(GroupPost::from(model))
    }

    #[instrument(skip(self))]
    async fn select_all(&self) -> StorageResult<Vec<GroupPost>> {
        let models = sqlx::query_as::<_, GroupPostModel>(
            r"
            SELECT group_id, post_id, created_date, updated_date
            FROM group_posts
            ORDER BY created_date, group_id, post_id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_storage_error)?;

        Ok(models.into_iter().map(GroupPost::from).collect())
    }

    #[instrument(skip(self))]
    async fn select_by_id(&self, id: &GroupPostId) -> StorageResult<Option<GroupPost>> {
        let model = sqlx::query_as::<_, GroupPostModel>(
            r"
            SELECT group_id, post_id, created_date, updated_date
            FROM group_posts
            WHERE group_id = $1 AND post_id = $2
            ",
        )
        .bind(id.group_id)
        .bind(id.post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?;

        Ok(model.map(GroupPost::from))
    }

    #[instrument(skip_all, fields(group_id = %entity.group_id, post_id = %entity.post_id))]
    async fn update(&self, entity: &GroupPost) -> StorageResult<GroupPost> {
        let model = sqlx::query_as::<_, GroupPostModel>(
            r"
            UPDATE group_posts
            SET created_date = $3, updated_date = $4
            WHERE group_id = $1 AND post_id = $2
            RETURNING group_id, post_id, created_date, updated_date
            ",
        )
        .bind(entity.group_id)
        .bind(entity.post_id)
        .bind(entity.created_date)
        .bind(entity.updated_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| row_vanished("group_posts"))?;

        Ok(GroupPost::from(model))
    }

    #[instrument(skip_all, fields(group_id = %entity.group_id, post_id = %entity.post_id))]
    async fn delete(&self, entity: &GroupPost) -> StorageResult<GroupPost> {
        let model = sqlx::query_as::<_, GroupPostModel>(
            r"
            DELETE FROM group_posts
            WHERE group_id = $1 AND post_id = $2
            RETURNING group_id, post_id, created_date, updated_date
            ",
        )
        .bind(entity.group_id)
        .bind(entity.post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| row_vanished("group_posts"))?;

        Ok(GroupPost::from(model))
    }
}
