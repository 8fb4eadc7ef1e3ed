use agora_core::Profile;

use crate::models::ProfileModel;

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: model.id,
            name: model.name,
            username: model.username,
            email: model.email,
            created_date: model.created_date,
            updated_date: model.updated_date,
        }
    }
}
