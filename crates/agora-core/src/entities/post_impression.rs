//! PostImpression entity - a profile's reaction to a post

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::traits::{Entity, EntityId};

/// Kind of impression left on a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impression {
    #[default]
    Like,
    Dislike,
    Love,
    Laugh,
}

impl Impression {
    /// Convert from database integer representation
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Like),
            1 => Some(Self::Dislike),
            2 => Some(Self::Love),
            3 => Some(Self::Laugh),
            _ => None,
        }
    }

    /// Convert to database integer representation
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Like => 0,
            Self::Dislike => 1,
            Self::Love => 2,
            Self::Laugh => 3,
        }
    }
}

/// Composite key of a PostImpression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostImpressionId {
    pub post_id: Uuid,
    pub profile_id: Uuid,
}

impl PostImpressionId {
    pub fn new(post_id: Uuid, profile_id: Uuid) -> Self {
        Self {
            post_id,
            profile_id,
        }
    }
}

impl EntityId for PostImpressionId {
    fn components(&self) -> Vec<(&'static str, Uuid)> {
        vec![("PostId", self.post_id), ("ProfileId", self.profile_id)]
    }
}

impl fmt::Display for PostImpressionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.post_id, self.profile_id)
    }
}

/// PostImpression entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostImpression {
    pub post_id: Uuid,
    pub profile_id: Uuid,
    #[serde(default)]
    pub impression: Impression,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl Entity for PostImpression {
    type Id = PostImpressionId;

    const NAME: &'static str = "PostImpression";

    fn id(&self) -> PostImpressionId {
        PostImpressionId::new(self.post_id, self.profile_id)
    }

    fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    fn updated_date(&self) -> DateTime<Utc> {
        self.updated_date
    }
}
