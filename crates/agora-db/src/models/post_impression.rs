//! Post impression database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for post_impressions table
#[derive(Debug, Clone, FromRow)]
pub struct PostImpressionModel {
    pub post_id: Uuid,
    pub profile_id: Uuid,
    /// `Impression::as_i32`
    pub impression: i32,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}
