//! Domain entities - the records each foundation service manages

mod comment;
mod group;
mod group_membership;
mod group_post;
mod post;
mod post_impression;
mod profile;

pub use comment::Comment;
pub use group::{Group, GroupStatus};
pub use group_membership::GroupMembership;
pub use group_post::{GroupPost, GroupPostId};
pub use post::Post;
pub use post_impression::{Impression, PostImpression, PostImpressionId};
pub use profile::Profile;
