//! PostgreSQL storage for PostImpression

use agora_core::{PostImpression, PostImpressionId, StorageBroker, StorageResult};
use async_trait::async_trait;
use tracing::instrument;

use crate::brokers::error::{map_storage_error, row_vanished};
use crate::models::PostImpressionModel;

use super::PgStorageBroker;

#[async_trait]
impl StorageBroker<PostImpression> for PgStorageBroker {
    #[instrument(skip_all, fields(post_id = %entity.post_id, profile_id = %entity.profile_id))]
    async fn insert(&self, entity: &PostImpression) -> StorageResult<PostImpression> {
        let model = sqlx::query_as::<_, PostImpressionModel>(
            r"
            INSERT INTO post_impressions (post_id, profile_id, impression, created_date, updated_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING post_id, profile_id, impression, created_date, updated_date
            ",
        )
        .bind(entity.post_id)
        .bind(entity.profile_id)
        .bind(entity.impression.as_i32())
        .bind(entity.created_date)
        .bind(entity.updated_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_storage_error)?;

        PostImpression::try_from(model)
    }

    #[instrument(skip(self))]
    async fn select_all(&self) -> StorageResult<Vec<PostImpression>> {
        let models = sqlx::query_as::<_, PostImpressionModel>(
            r"
            SELECT post_id, profile_id, impression, created_date, updated_date
            FROM post_impressions
            ORDER BY created_date, post_id, profile_id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_storage_error)?;

        models.into_iter().map(PostImpression::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn select_by_id(&self, id: &PostImpressionId) -> StorageResult<Option<PostImpression>> {
        let model = sqlx::query_as::<_, PostImpressionModel>(
            r"
            SELECT post_id, profile_id, impression, created_date, updated_date
            FROM post_impressions
            WHERE post_id = $1 AND profile_id = $2
            ",
        )
        .bind(id.post_id)
        .bind(id.profile_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?;

        model.map(PostImpression::try_from).transpose()
    }

    #[instrument(skip_all, fields(post_id = %entity.post_id, profile_id = %entity.profile_id))]
    async fn update(&self, entity: &PostImpression) -> StorageResult<PostImpression> {
        let model = sqlx::query_as::<_, PostImpressionModel>(
            r"
            UPDATE post_impressions
            SET impression = $3, created_date = $4, updated_date = $5
            WHERE post_id = $1 AND profile_id = $2
            RETURNING post_id, profile_id, impression, created_date, updated_date
            ",
        )
        .bind(entity.post_id)
        .bind(entity.profile_id)
        .bind(entity.impression.as_i32())
        .bind(entity.created_date)
        .bind(entity.updated_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| row_vanished("post_impressions"))?;

        PostImpression::try_from(model)
    }

    #[instrument(skip_all, fields(post_id = %entity.post_id, profile_id = %entity.profile_id))]
    async fn delete(&self, entity: &PostImpression) -> StorageResult<PostImpression> {
        let model = sqlx::query_as::<_, PostImpressionModel>(
            r"
            DELETE FROM post_impressions
            WHERE post_id = $1 AND profile_id = $2
            RETURNING post_id, profile_id, impression, created_date, updated_date
            ",
        )
        .bind(entity.post_id)
        .bind(entity.profile_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| row_vanished("post_impressions"))?;

        PostImpression::try_from(model)
    }
}
