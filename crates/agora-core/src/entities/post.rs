//! Post entity - a piece of content written by a profile

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::traits::{Entity, FieldRule};

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub content: String,
    pub author: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl Post {
    /// Create a new Post stamped with the given time
    pub fn new(id: Uuid, content: String, author: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            content,
            author,
            created_date: now,
            updated_date: now,
        }
    }

    /// Replace the content and bump the update date
    pub fn edit(&mut self, content: String, now: DateTime<Utc>) {
        self.content = content;
        self.updated_date = now;
    }
}

impl Entity for Post {
    type Id = Uuid;

    const NAME: &'static str = "Post";

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
            FieldRule::required_text("Author", &self.author),
        ]
    }
}
