//! Profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}
