//! Entity traits - the shape every foundation service is generic over
//!
//! An entity exposes its identifier, its audit dates, and the rules that
//! apply to its own fields. Everything else (required ids, audit-date
//! rules, recency) is enforced uniformly by the validation engine.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Violation message for an empty identifier
pub const ID_REQUIRED: &str = "Id is required";
/// Violation message for a blank text field
pub const TEXT_REQUIRED: &str = "Text is required";
/// Violation message for a default-valued field
pub const VALUE_REQUIRED: &str = "Value is required";

/// Identifier of an entity, single or composite
pub trait EntityId: Clone + fmt::Debug + fmt::Display + PartialEq + Send + Sync + 'static {
    /// Identifier components as `(field, value)` in key order
    fn components(&self) -> Vec<(&'static str, Uuid)>;
}

impl EntityId for Uuid {
    fn components(&self) -> Vec<(&'static str, Uuid)> {
        vec![("Id", *self)]
    }
}

/// A persisted record handled by a foundation service
pub trait Entity: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Identifier type (a `Uuid` or a composite key)
    type Id: EntityId;

    /// Name used in violation and error messages
    const NAME: &'static str;

    fn id(&self) -> Self::Id;

    fn created_date(&self) -> DateTime<Utc>;

    fn updated_date(&self) -> DateTime<Utc>;

    /// Rules on the entity's own fields, in declaration order.
    ///
    /// Identifier components and audit dates are not listed here.
    fn field_rules(&self) -> Vec<FieldRule> {
        Vec::new()
    }
}

/// Outcome of one rule applied to one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub violated: bool,
    pub message: &'static str,
}

impl FieldRule {
    /// Fails when the id is nil
    pub fn required_id(field: &'static str, value: Uuid) -> Self {
        Self {
            field,
            violated: value.is_nil(),
            message: ID_REQUIRED,
        }
    }

    /// Fails when the text is empty or whitespace
    pub fn required_text(field: &'static str, value: &str) -> Self {
        Self {
            field,
            violated: value.trim().is_empty(),
            message: TEXT_REQUIRED,
        }
    }

    /// Fails when the date is the default value
    pub fn required_date(field: &'static str, value: DateTime<Utc>) -> Self {
        Self {
            field,
            violated: value == DateTime::<Utc>::default(),
            message: VALUE_REQUIRED,
        }
    }
}
