//! GroupPost entity - links a post into a group

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::traits::{Entity, EntityId};

/// Composite key of a GroupPost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupPostId {
    pub group_id: Uuid,
    pub post_id: Uuid,
}

impl GroupPostId {
    pub fn new(group_id: Uuid, post_id: Uuid) -> Self {
        Self { group_id, post_id }
    }
}

impl EntityId for GroupPostId {
    fn components(&self) -> Vec<(&'static str, Uuid)> {
        vec![("GroupId", self.group_id), ("PostId", self.post_id)]
    }
}

impl fmt::Display for GroupPostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group_id, self.post_id)
    }
}

/// GroupPost entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPost {
    pub group_id: Uuid,
    pub post_id: Uuid,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl Entity for GroupPost {
    type Id = GroupPostId;

    const NAME: &'static str = "GroupPost";

    fn id(&self) -> GroupPostId {
        GroupPostId::new(self.group_id, self.post_id)
    }

    fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    fn updated_date(&self) -> DateTime<Utc> {
        self.updated_date
    }
}
