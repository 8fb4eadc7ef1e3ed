//! GroupMembership entity - a profile's membership in a group

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::traits::{Entity, FieldRule};

/// GroupMembership entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembership {
    pub id: Uuid,
    pub group_id: Uuid,
    pub profile_id: Uuid,
    pub membership_date: DateTime<Utc>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl Entity for GroupMembership {
    type Id = Uuid;

    const NAME: &'static str = "GroupMembership";

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
            FieldRule::required_id("GroupId", self.group_id),
            FieldRule::required_id("ProfileId", self.profile_id),
            FieldRule::required_date("MembershipDate", self.membership_date),
        ]
    }
}
