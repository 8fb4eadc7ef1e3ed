//! Group entity - a community profiles can join and post into

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::traits::{Entity, FieldRule};

/// Group visibility status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    #[default]
    Active,
    Inactive,
}

impl GroupStatus {
    /// Convert from database integer representation
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Active),
            1 => Some(Self::Inactive),
            _ => None,
        }
    }

    /// Convert to database integer representation
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Active => 0,
            Self::Inactive => 1,
        }
    }
}

/// Group entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: GroupStatus,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl Entity for Group {
    type Id = Uuid;

    const NAME: &'static str = "Group";

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
        vec![FieldRule::required_text("Name", &self.name)]
    }
}
