//! Database models with SQLx `FromRow` derives

mod comment;
mod group;
mod group_membership;
mod group_post;
mod post;
mod post_impression;
mod profile;

pub use comment::CommentModel;
pub use group::GroupModel;
pub use group_membership::GroupMembershipModel;
pub use group_post::GroupPostModel;
pub use post::PostModel;
pub use post_impression::PostImpressionModel;
pub use profile::ProfileModel;
