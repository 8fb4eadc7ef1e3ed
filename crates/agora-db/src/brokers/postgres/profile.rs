//! PostgreSQL storage for Profile

use agora_core::{Profile, StorageBroker, StorageResult};
use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use crate::brokers::error::{map_storage_error, row_vanished};
use crate::models::ProfileModel;

use super::PgStorageBroker;

#[async_trait]
impl StorageBroker<Profile> for PgStorageBroker {
    #[instrument(skip_all, fields(id = %entity.id))]
    async fn insert(&self, entity: &Profile) -> StorageResult<Profile> {
        let model = sqlx::query_as::<_, ProfileModel>(
            r"
            INSERT INTO profiles (id, name, username, email, created_date, updated_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, username, email, created_date, updated_date
            ",
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.username)
        .bind(&entity.email)
        .bind(entity.created_date)
        .bind(entity.updated_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_storage_error)?;

        Ok(Profile::from(model))
    }

    #[instrument(skip(self))]
    async fn select_all(&self) -> StorageResult<Vec<Profile>> {
        let models = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT id, name, username, email, created_date, updated_date
            FROM profiles
            ORDER BY created_date, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_storage_error)?;

        Ok(models.into_iter().map(Profile::from).collect())
    }

    #[instrument(skip(self))]
    async fn select_by_id(&self, id: &Uuid) -> StorageResult<Option<Profile>> {
        let model = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT id, name, username, email, created_date, updated_date
            FROM profiles
            WHERE id = $1
            ",
        )
        .bind(*id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?;

        Ok(model.map(Profile::from))
    }

    #[instrument(skip_all, fields(id = %entity.id))]
    async fn update(&self, entity: &Profile) -> StorageResult<Profile> {
        let model = sqlx::query_as::<_, ProfileModel>(
            r"
            UPDATE profiles
            SET name = $2, username = $3, email = $4, created_date = $5, updated_date = $6
            WHERE id = $1
            RETURNING id, name, username, email, created_date, updated_date
            ",
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.username)
        .bind(&entity.email)
        .bind(entity.created_date)
        .bind(entity.updated_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| row_vanished("profiles"))?;

        Ok(Profile::from(model))
    }

    #[instrument(skip_all, fields(id = %entity.id))]
    async fn delete(&self, entity: &Profile) -> StorageResult<Profile> {
        let model = sqlx::query_as::<_, ProfileModel>(
            r"
            DELETE FROM profiles
            WHERE id = $1
            RETURNING id, name, username, email, created_date, updated_date
            ",
        )
        .bind(entity.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| row_vanished("profiles"))?;

        Ok(Profile::from(model))
    }
}
