//! Group membership database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for group_memberships table
#[derive(Debug, Clone, FromRow)]
pub struct GroupMembershipModel {
    pub id: Uuid,
    pub group_id: Uuid,
    pub profile_id: Uuid,
    pub membership_date: DateTime<Utc>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}
