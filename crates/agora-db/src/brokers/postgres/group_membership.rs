//! PostgreSQL storage for GroupMembership

use agora_core::{GroupMembership, StorageBroker, StorageResult};
use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use crate::brokers::error::{map_storage_error, row_vanished};
use crate::models::GroupMembershipModel;

use super::PgStorageBroker;

#[async_trait]
impl StorageBroker<GroupMembership> for PgStorageBroker {
    #[instrument(skip_all, fields(id = %entity.id))]
    async fn insert(&self, entity: &GroupMembership) -> StorageResult<GroupMembership> {
        let model = sqlx::query_as::<_, GroupMembershipModel>(
            r"
            INSERT INTO group_memberships (id, group_id, profile_id, membership_date, created_date, updated_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, group_id, profile_id, membership_date, created_date, updated_date
            ",
        )
        .bind(entity.id)
        .bind(entity.group_id)
        .bind(entity.profile_id)
        .bind(entity.membership_date)
        .bind(entity.created_date)
        .bind(entity.updated_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_storage_error)?;

        Ok(GroupMembership::from(model))
    }

    #[instrument(skip(self))]
    async fn select_all(&self) -> StorageResult<Vec<GroupMembership>> {
        let models = sqlx::query_as::<_, GroupMembershipModel>(
            r"
            SELECT id, group_id, profile_id, membership_date, created_date, updated_date
            FROM group_memberships
            ORDER BY created_date, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_storage_error)?;

        Ok(models.into_iter().map(GroupMembership::from).collect())
    }

    #[instrument(skip(self))]
    async fn select_by_id(&self, id: &Uuid) -> StorageResult<Option<GroupMembership>> {
        let model = sqlx::query_as::<_, GroupMembershipModel>(
            r"
            SELECT id, group_id, profile_id, membership_date, created_date, updated_date
            FROM group_memberships
            WHERE id = $1
            ",
        )
        .bind(*id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?;

        Ok(model.map(GroupMembership::from))
    }

    #[instrument(skip_all, fields(id = %entity.id))]
    async fn update(&self, entity: &GroupMembership) -> StorageResult<GroupMembership> {
        let model = sqlx::query_as::<_, GroupMembershipModel>(
            r"
            UPDATE group_memberships
            SET group_id = $2, profile_id = $3, membership_date = $4, created_date = $5, updated_date = $6
            WHERE id = $1
            RETURNING id, group_id, profile_id, membership_date, created_date, updated_date
            ",
        )
        .bind(entity.id)
        .bind(entity.group_id)
        .bind(entity.profile_id)
        .bind(entity.membership_date)
        .bind(entity.created_date)
        .bind(entity.updated_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| row_vanished("group_memberships"))?;

        Ok(GroupMembership::from(model))
    }

    #[instrument(skip_all, fields(id = %entity.id))]
    async fn delete(&self, entity: &GroupMembership) -> StorageResult<GroupMembership> {
        let model = sqlx::query_as::<_, GroupMembershipModel>(
            r"
            DELETE FROM group_memberships
            WHERE id = $1
            RETURNING id, group_id, profile_id, membership_date, created_date, updated_date
            ",
        )
        .bind(entity.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| row_vanished("group_memberships"))?;

        Ok(GroupMembership::from(model))
    }
}
