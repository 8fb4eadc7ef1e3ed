//! Group database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for groups table
#[derive(Debug, Clone, FromRow)]
pub struct GroupModel {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// `GroupStatus::as_i32`
    pub status: i32,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}
