//! Comment entity - a reply attached to a post

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::traits::{Entity, FieldRule};

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub post_id: Uuid,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl Entity for Comment {
    type Id = Uuid;

    const NAME: &'static str = "Comment";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    fn updated_date(&self) -> DateTime<Utc> {
        self.updated_date
    }

    fn field_rules(&self) -> Vec<FieldRule> {
        vec![
            FieldRule::required_text("Content", &self.content),
            FieldRule::required_id("PostId", self.post_id),
        ]
    }
}
