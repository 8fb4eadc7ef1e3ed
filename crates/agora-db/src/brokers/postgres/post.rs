//! PostgreSQL storage for Post

use agora_core::{Post, StorageBroker, StorageResult};
use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use crate::brokers::error::{map_storage_error, row_vanished};
use crate::models::PostModel;

use super::PgStorageBroker;

#[async_trait]
impl StorageBroker<Post> for PgStorageBroker {
    #[instrument(skip_all, fields(id = %entity.id))]
    async fn insert(&self, entity: &Post) -> StorageResult<Post> {
        let model = sqlx::query_as::<_, PostModel>(
            r"
            INSERT INTO posts (id, content, author, created_date, updated_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, content, author, created_date, updated_date
            ",
        )
        .bind(entity.id)
        .bind(&entity.content)
        .bind(&entity.author)
        .bind(entity.created_date)
        .bind(entity.updated_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_storage_error)?;

        Ok(Post::from(model))
    }

    #[instrument(skip(self))]
    async fn select_all(&self) -> StorageResult<Vec<Post>> {
        let models = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, content, author, created_date, updated_date
            FROM posts
            ORDER BY created_date, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_storage_error)?;

        Ok(models.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn select_by_id(&self, id: &Uuid) -> StorageResult<Option<Post>> {
        let model = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, content, author, created_date, updated_date
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(*id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?;

        Ok(model.map(Post::from))
    }

    #[instrument(skip_all, fields(id = %entity.id))]
    async fn update(&self, entity: &Post) -> StorageResult<Post> {
        let model = sqlx::query_as::<_, PostModel>(
            r"
            UPDATE posts
            SET content = $2, author = $3, created_date = $4, updated_date = $5
            WHERE id = $1
            RETURNING id, content, author, created_date, updated_date
            ",
        )
        .bind(entity.id)
        .bind(&entity.content)
        .bind(&entity.author)
        .bind(entity.created_date)
        .bind(entity.updated_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| row_vanished("posts"))?;

        Ok(Post::from(model))
    }

    #[instrument(skip_all, fields(id = %entity.id))]
    async fn delete(&self, entity: &Post) -> StorageResult<Post> {
        let model = sqlx::query_as::<_, PostModel>(
            r"
            DELETE FROM posts
            WHERE id = $1
            RETURNING id, content, author, created_date, updated_date
            ",
        )
        .bind(entity.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| row_vanished("posts"))?;

        Ok(Post::from(model))
    }
}
