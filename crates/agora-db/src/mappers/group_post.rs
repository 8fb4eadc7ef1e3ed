use agora_core::GroupPost;

use crate::models::GroupPostModel;

impl From<GroupPostModel> for GroupPost {
    fn from(model: GroupPostModel) -> Self {
        GroupPost {
            group_id: model.group_id,
            post_id: model.post_id,
            created_date: model.created_date,
            updated_date: model.updated_date,
        }
    }
}
