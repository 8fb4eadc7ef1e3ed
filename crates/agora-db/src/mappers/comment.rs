use agora_core::Comment;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            content: model.content,
            post_id: model.post_id,
            created_date: model.created_date,
            updated_date: model.updated_date,
        }
    }
}
