//! Group post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for group_posts table
#[derive(Debug, Clone, FromRow)]
pub struct GroupPostModel {
    pub group_id: Uuid,
    pub post_id: Uuid,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}
