//! PostgreSQL storage for Comment

use agora_core::{Comment, StorageBroker, StorageResult};
use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use crate::brokers::error::{map_storage_error, row_vanished};
use crate::models::CommentModel;

use super::PgStorageBroker;

#[async_trait]
impl StorageBroker<Comment> for PgStorageBroker {
    #[instrument(skip_all, fields(id = %entity.id))]
    async fn insert(&self, entity: &Comment) -> StorageResult<Comment> {
        let model = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (id, content, post_id, created_date, updated_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, content, post_id, created_date, updated_date
            ",
        )
        .bind(entity.id)
        .bind(&entity.content)
        .bind(entity.post_id)
        .bind(entity.created_date)
        .bind(entity.updated_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_storage_error)?;

        Ok(Comment::from(model))
    }

    #[instrument(skip(self))]
    async fn select_all(&self) -> StorageResult<Vec<Comment>> {
        let models = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, content, post_id, created_date, updated_date
            FROM comments
            ORDER BY created_date, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_storage_error)?;

        Ok(models.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn select_by_id(&self, id: &Uuid) -> StorageResult<Option<Comment>> {
        let model = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, content, post_id, created_date, updated_date
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(*id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?;

        Ok(model.map(Comment::from))
    }

    #[instrument(skip_all, fields(id = %entity.id))]
    async fn update(&self, entity: &Comment) -> StorageResult<Comment> {
        let model = sqlx::query_as::<_, CommentModel>(
            r"
            UPDATE comments
            SET content = $2, post_id = $3, created_date = $4, updated_date = $5
            WHERE id = $1
            RETURNING id, content, post_id, created_date, updated_date
            ",
        )
        .bind(entity.id)
        .bind(&entity.content)
        .bind(entity.post_id)
        .bind(entity.created_date)
        .bind(entity.updated_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| row_vanished("comments"))?;

        Ok(Comment::from(model))
    }

    #[instrument(skip_all, fields(id = %entity.id))]
    async fn delete(&self, entity: &Comment) -> StorageResult<Comment> {
        let model = sqlx::query_as::<_, CommentModel>(
            r"
            DELETE FROM comments
            WHERE id = $1
            RETURNING id, content, post_id, created_date, updated_date
            ",
        )
        .bind(entity.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| row_vanished("comments"))?;

        Ok(Comment::from(model))
    }
}
