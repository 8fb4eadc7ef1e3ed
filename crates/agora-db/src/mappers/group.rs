//! Group model -> entity mapper

use agora_core::{Group, GroupStatus, StorageError};

use crate::models::GroupModel;

impl TryFrom<GroupModel> for Group {
    type Error = StorageError;

    fn try_from(model: GroupModel) -> Result<Self, Self::Error> {
        let status = GroupStatus::from_i32(model.status).ok_or_else(|| {
            StorageError::unexpected(format!("unknown group status {}", model.status))
        })?;

        Ok(Group {
            id: model.id,
            name: model.name,
            description: model.description,
            status,
            created_date: model.created_date,
            updated_date: model.updated_date,
        })
    }
}
