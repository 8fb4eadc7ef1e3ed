use agora_core::GroupMembership;

use crate::models::GroupMembershipModel;

impl From<GroupMembershipModel> for GroupMembership {
    fn from(model: GroupMembershipModel) -> Self {
        GroupMembership {
            id: model.id,
            group_id: model.group_id,
            profile_id: model.profile_id,
            membership_date: model.membership_date,
            created_date: model.created_date,
            updated_date: model.updated_date,
        }
    }
}
