//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: Uuid,
    pub content: String,
    pub author: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}
