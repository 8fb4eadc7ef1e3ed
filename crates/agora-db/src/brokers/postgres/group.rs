//! PostgreSQL storage for Group

use agora_core::{Group, StorageBroker, StorageResult};
use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use crate::brokers::error::{map_storage_error, row_vanished};
use crate::models::GroupModel;

use super::PgStorageBroker;

#[async_trait]
impl StorageBroker<Group> for PgStorageBroker {
    #[instrument(skip_all, fields(id = %entity.id))]
    async fn insert(&self, entity: &Group) -> StorageResult<Group> {
        let model = sqlx::query_as::<_, GroupModel>(
            r"
            INSERT INTO groups (id, name, description, status, created_date, updated_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, description, status, created_date, updated_date
            ",
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.status.as_i32())
        .bind(entity.created_date)
        .bind(entity.updated_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_storage_error)?;

        Group::try_from(model)
    }

    #[instrument(skip(self))]
    async fn select_all(&self) -> StorageResult<Vec<Group>> {
        let models = sqlx::query_as::<_, GroupModel>(
            r"
            SELECT id, name, description, status, created_date, updated_date
            FROM groups
            ORDER BY created_date, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_storage_error)?;

        models.into_iter().map(Group::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn select_by_id(&self, id: &Uuid) -> StorageResult<Option<Group>> {
        let model = sqlx::query_as::<_, GroupModel>(
            r"
            SELECT id, name, description, status, created_date, updated_date
            FROM groups
            WHERE id = $1
            ",
        )
        .bind(*id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?;

        model.map(Group::try_from).transpose()
    }

    #[instrument(skip_all, fields(id = %entity.id))]
    async fn update(&self, entity: &Group) -> StorageResult<Group> {
        let model = sqlx::query_as::<_, GroupModel>(
            r"
            UPDATE groups
            SET name = $2, description = $3, status = $4, created_date = $5, updated_date = $6
            WHERE id = $1
            RETURNING id, name, description, status, created_date, updated_date
            ",
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.status.as_i32())
        .bind(entity.created_date)
        .bind(entity.updated_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| row_vanished("groups"))?;

        Group::try_from(model)
    }

    #[instrument(skip_all, fields(id = %entity.id))]
    async fn delete(&self, entity: &Group) -> StorageResult<Group> {
        let model = sqlx::query_as::<_, GroupModel>(
            r"
            DELETE FROM groups
            WHERE id = $1
            RETURNING id, name, description, status, created_date, updated_date
            ",
        )
        .bind(entity.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| row_vanished("groups"))?;

        Group::try_from(model)
    }
}
