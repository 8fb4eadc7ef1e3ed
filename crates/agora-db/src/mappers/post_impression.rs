//! Post impression model -> entity mapper

use agora_core::{Impression, PostImpression, StorageError};

use crate::models::PostImpressionModel;

impl TryFrom<PostImpressionModel> for PostImpression {
    type Error = StorageError;

    fn try_from(model: PostImpressionModel) -> Result<Self, Self::Error> {
        let impression = Impression::from_i32(model.impression).ok_or_else(|| {
            StorageError::unexpected(format!("unknown impression {}", model.impression))
        })?;

        Ok(PostImpression {
            post_id: model.post_id,
            profile_id: model.profile_id,
            impression,
            created_date: model.created_date,
            updated_date: model.updated_date,
        })
    }
}
