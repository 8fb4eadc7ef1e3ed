//! Profile entity - a member of the network

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::traits::{Entity, FieldRule};

/// Profile entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl Entity for Profile {
    type Id = Uuid;

    const NAME: &'static str = "Profile";

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
            FieldRule::required_text("Name", &self.name),
            FieldRule::required_text("Username", &self.username),
        ]
    }
}
