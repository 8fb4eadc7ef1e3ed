//! Post model -> entity mapper

use agora_core::Post;

use crate::models::PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            content: model.content,
            author: model.author,
            created_date: model.created_date,
            updated_date: model.updated_date,
        }
    }
}
