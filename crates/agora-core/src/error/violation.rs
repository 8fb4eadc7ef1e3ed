//! Field-level validation violations

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One field and the messages of every rule it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolation {
    pub field: String,
    pub messages: Vec<String>,
}

/// Ordered set of violations, keyed by field
///
/// Fields keep their first-insertion order and each field keeps its
/// messages in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<ValidationViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a field, creating the field entry if needed
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();

        match self.0.iter_mut().find(|v| v.field == field) {
            Some(existing) => existing.messages.push(message),
            None => self.0.push(ValidationViolation {
                field,
                messages: vec![message],
            }),
        }
    }

    /// Builder form of [`Violations::add`]
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages recorded for a field
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.messages.as_slice())
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|v| v.field.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationViolation> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a ValidationViolation;
    type IntoIter = std::slice::Iter<'a, ValidationViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Serialized as a JSON object so field order survives into error responses
impl Serialize for Violations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for violation in &self.0 {
            map.serialize_entry(&violation.field, &violation.messages)?;
        }
        map.end()
    }
}
