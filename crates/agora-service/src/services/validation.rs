//! Validation engine
//!
//! Pure checks over an entity and the current time. Every rule runs, and
//! all violations are returned together in one [`ValidationFailure::Invalid`];
//! a missing entity and a missing record are reported on their own.

use std::time::Duration;

use agora_core::traits::{ID_REQUIRED, VALUE_REQUIRED};
use agora_core::{Entity, EntityId, ValidationFailure, Violations};
use chrono::{DateTime, TimeDelta, Utc};

pub const DATE_NOT_RECENT: &str = "Date is not recent";
pub const DATE_SAME_AS_CREATED: &str = "Date is the same as CreatedDate";
pub const DATE_NOT_SAME_AS_CREATED: &str = "Date is not the same as CreatedDate";
pub const DATE_SAME_AS_UPDATED: &str = "Date is the same as UpdatedDate";

const CREATED_DATE: &str = "CreatedDate";
const UPDATED_DATE: &str = "UpdatedDate";

/// Which write the entity is validated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    /// `UpdatedDate` must equal `CreatedDate`
    Add,
    /// `UpdatedDate` must differ from `CreatedDate`
    Modify,
}

/// Stateless rule set shared by every foundation service
#[derive(Debug, Clone, Copy)]
pub struct ValidationEngine {
    recency_window: TimeDelta,
}

impl ValidationEngine {
    pub fn new(recency_window: Duration) -> Self {
        // Windows beyond chrono's range saturate at ~179 years.
        let recency_window =
            TimeDelta::from_std(recency_window).unwrap_or_else(|_| TimeDelta::days(i64::from(u16::MAX)));
        Self { recency_window }
    }

    pub fn recency_window(&self) -> TimeDelta {
        self.recency_window
    }

    /// Unwrap a submitted entity, failing when none was given
    pub fn ensure_present<E: Entity>(&self, entity: Option<E>) -> Result<E, ValidationFailure> {
        entity.ok_or(ValidationFailure::Null { entity: E::NAME })
    }

    pub fn validate_on_add<E: Entity>(
        &self,
        entity: &E,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationFailure> {
        self.validate_fields(entity, now, WriteKind::Add)
    }

    pub fn validate_on_modify<E: Entity>(
        &self,
        entity: &E,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationFailure> {
        self.validate_fields(entity, now, WriteKind::Modify)
    }

    /// Check a bare identifier before it is used for a lookup
    pub fn validate_id<E: Entity>(&self, id: &E::Id) -> Result<(), ValidationFailure> {
        let mut violations = Violations::new();
        add_id_violations(&mut violations, id);
        into_result::<E>(violations)
    }

    /// Turn an empty lookup into a not-found failure carrying the identifier
    pub fn ensure_found<E: Entity>(
        &self,
        stored: Option<E>,
        id: &E::Id,
    ) -> Result<E, ValidationFailure> {
        stored.ok_or_else(|| ValidationFailure::NotFound {
            entity: E::NAME,
            identifiers: id.components(),
        })
    }

    /// Compare a modification against the stored record
    pub fn validate_against_storage<E: Entity>(
        &self,
        input: &E,
        stored: &E,
    ) -> Result<(), ValidationFailure> {
        let mut violations = Violations::new();

        if input.created_date() != stored.created_date() {
            violations.add(CREATED_DATE, DATE_NOT_SAME_AS_CREATED);
        }

        if input.updated_date() == stored.updated_date() {
            violations.add(UPDATED_DATE, DATE_SAME_AS_UPDATED);
        }

        into_result::<E>(violations)
    }

    /// Collect every field violation for a write, in field order
    pub fn collect_violations<E: Entity>(
        &self,
        entity: &E,
        now: DateTime<Utc>,
        kind: WriteKind,
    ) -> Violations {
        let mut violations = Violations::new();
        add_id_violations(&mut violations, &entity.id());

        for rule in entity.field_rules() {
            if rule.violated {
                violations.add(rule.field, rule.message);
            }
        }

        let created_date = entity.created_date();
        let updated_date = entity.updated_date();

        if is_default(created_date) {
            violations.add(CREATED_DATE, VALUE_REQUIRED);
        }

        // The three UpdatedDate rules accumulate on the same field.
        if is_default(updated_date) {
            violations.add(UPDATED_DATE, VALUE_REQUIRED);
        }

        if !self.is_recent(updated_date, now) {
            violations.add(UPDATED_DATE, DATE_NOT_RECENT);
        }

        let same_dates = updated_date == created_date;
        match kind {
            WriteKind::Add if !same_dates => violations.add(UPDATED_DATE, DATE_SAME_AS_CREATED),
            WriteKind::Modify if same_dates => violations.add(UPDATED_DATE, DATE_SAME_AS_CREATED),
            _ => {}
        }

        violations
    }

    /// `now - window <= date <= now + window`
    pub fn is_recent(&self, date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let not_before = now
            .checked_sub_signed(self.recency_window)
            .is_none_or(|lower| date >= lower);
        let not_after = now
            .checked_add_signed(self.recency_window)
            .is_none_or(|upper| date <= upper);

        not_before && not_after
    }

    fn validate_fields<E: Entity>(
        &self,
        entity: &E,
        now: DateTime<Utc>,
        kind: WriteKind,
    ) -> Result<(), ValidationFailure> {
        into_result::<E>(self.collect_violations(entity, now, kind))
    }
}

fn add_id_violations<I: EntityId>(violations: &mut Violations, id: &I) {
    for (field, value) in id.components() {
        if value.is_nil() {
            violations.add(field, ID_REQUIRED);
        }
    }
}

fn is_default(date: DateTime<Utc>) -> bool {
    date == DateTime::<Utc>::default()
}

fn into_result<E: Entity>(violations: Violations) -> Result<(), ValidationFailure> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure::Invalid {
            entity: E::NAME,
            violations,
        })
    }
}

#[cfg(test)]
mod tests {
    use agora_core::traits::TEXT_REQUIRED;
    use agora_core::{GroupMembership, GroupPost, GroupPostId, Post};
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;

    fn engine() -> ValidationEngine {
        ValidationEngine::new(Duration::from_secs(60))
    }

    fn now() -> DateTime<Utc> {
        "2024-05-01T12:00:00Z".parse().unwrap()
    }

    fn group_post(date: DateTime<Utc>) -> GroupPost {
        GroupPost {
            group_id: Uuid::new_v4(),
            post_id: Uuid::new_v4(),
            created_date: date,
            updated_date: date,
        }
    }

    fn empty_group_post() -> GroupPost {
        GroupPost {
            group_id: Uuid::nil(),
            post_id: Uuid::nil(),
            created_date: DateTime::default(),
            updated_date: DateTime::default(),
        }
    }

    #[test]
    fn test_valid_group_post_passes_on_add() {
        assert_eq!(engine().validate_on_add(&group_post(now()), now()), Ok(()));
    }

    #[test]
    fn test_missing_entity_is_null_failure() {
        let result = engine().ensure_present::<GroupPost>(None);
        assert_eq!(result, Err(ValidationFailure::Null { entity: "GroupPost" }));
    }

    #[test]
    fn test_empty_group_post_on_add_reports_every_field_in_order() {
        let result = engine().validate_on_add(&empty_group_post(), now());

        let expected = Violations::new()
            .with("GroupId", ID_REQUIRED)
            .with("PostId", ID_REQUIRED)
            .with("CreatedDate", VALUE_REQUIRED)
            .with("UpdatedDate", VALUE_REQUIRED)
            .with("UpdatedDate", DATE_NOT_RECENT);

        assert_eq!(
            result,
            Err(ValidationFailure::Invalid {
                entity: "GroupPost",
                violations: expected,
            })
        );
    }

    #[test]
    fn test_empty_group_post_on_modify_also_reports_same_dates() {
        let result = engine().validate_on_modify(&empty_group_post(), now());

        let expected = Violations::new()
            .with("GroupId", ID_REQUIRED)
            .with("PostId", ID_REQUIRED)
            .with("CreatedDate", VALUE_REQUIRED)
            .with("UpdatedDate", VALUE_REQUIRED)
            .with("UpdatedDate", DATE_NOT_RECENT)
            .with("UpdatedDate", DATE_SAME_AS_CREATED);

        assert_eq!(
            result,
            Err(ValidationFailure::Invalid {
                entity: "GroupPost",
                violations: expected,
            })
        );
    }

    #[test]
    fn test_entity_rules_sit_between_ids_and_dates() {
        let post = Post {
            id: Uuid::nil(),
            content: " ".to_string(),
            author: String::new(),
            created_date: now(),
            updated_date: now(),
        };

        let violations = engine().collect_violations(&post, now(), WriteKind::Add);

        assert_eq!(
            violations.fields().collect::<Vec<_>>(),
            vec!["Id", "Content", "Author"]
        );
        assert_eq!(violations.get("Content"), Some(&[TEXT_REQUIRED.to_string()][..]));
    }

    #[test]
    fn test_membership_rules() {
        let membership = GroupMembership {
            id: Uuid::new_v4(),
            group_id: Uuid::nil(),
            profile_id: Uuid::new_v4(),
            membership_date: DateTime::default(),
            created_date: now(),
            updated_date: now(),
        };

        let violations = engine().collect_violations(&membership, now(), WriteKind::Add);

        assert_eq!(
            violations,
            Violations::new()
                .with("GroupId", ID_REQUIRED)
                .with("MembershipDate", VALUE_REQUIRED)
        );
    }

    #[test]
    fn test_add_with_different_dates_is_rejected() {
        let mut entity = group_post(now());
        entity.created_date = now() - TimeDelta::seconds(5);

        let violations = engine().collect_violations(&entity, now(), WriteKind::Add);
        assert_eq!(
            violations,
            Violations::new().with("UpdatedDate", DATE_SAME_AS_CREATED)
        );
    }

    #[test]
    fn test_modify_with_equal_dates_is_rejected() {
        let violations = engine().collect_violations(&group_post(now()), now(), WriteKind::Modify);
        assert_eq!(
            violations,
            Violations::new().with("UpdatedDate", DATE_SAME_AS_CREATED)
        );
    }

    #[rstest]
    #[case::exactly_now(0, true)]
    #[case::window_in_past(-60, true)]
    #[case::window_in_future(60, true)]
    #[case::past_window_by_one(-61, false)]
    #[case::beyond_window_by_one(61, false)]
    #[case::far_past(-86_400, false)]
    fn test_recency_window_is_inclusive(#[case] offset_secs: i64, #[case] recent: bool) {
        let date = now() + TimeDelta::seconds(offset_secs);
        assert_eq!(engine().is_recent(date, now()), recent);
    }

    #[test]
    fn test_recency_boundary_has_millisecond_precision() {
        let just_outside = now() - TimeDelta::seconds(60) - TimeDelta::milliseconds(1);
        assert!(!engine().is_recent(just_outside, now()));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let entity = empty_group_post();
        let first = engine().collect_violations(&entity, now(), WriteKind::Modify);
        let second = engine().collect_violations(&entity, now(), WriteKind::Modify);
        assert_eq!(first, second);
    }

    #[test]
    fn test_validate_id_checks_each_component() {
        let id = GroupPostId::new(Uuid::new_v4(), Uuid::nil());
        let result = engine().validate_id::<GroupPost>(&id);

        assert_eq!(
            result,
            Err(ValidationFailure::Invalid {
                entity: "GroupPost",
                violations: Violations::new().with("PostId", ID_REQUIRED),
            })
        );
    }

    #[test]
    fn test_not_found_carries_identifiers() {
        let id = GroupPostId::new(Uuid::new_v4(), Uuid::new_v4());
        let result = engine().ensure_found::<GroupPost>(None, &id);

        assert_eq!(
            result,
            Err(ValidationFailure::NotFound {
                entity: "GroupPost",
                identifiers: vec![("GroupId", id.group_id), ("PostId", id.post_id)],
            })
        );
    }

    #[test]
    fn test_storage_comparison() {
        let stored = group_post(now() - TimeDelta::minutes(10));
        let mut input = stored.clone();
        input.created_date = now() - TimeDelta::minutes(20);

        let result = engine().validate_against_storage(&input, &stored);

        assert_eq!(
            result,
            Err(ValidationFailure::Invalid {
                entity: "GroupPost",
                violations: Violations::new()
                    .with("CreatedDate", DATE_NOT_SAME_AS_CREATED)
                    .with("UpdatedDate", DATE_SAME_AS_UPDATED),
            })
        );
    }
}
