//! Whole-form validation.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::field::validate_field;

/// One submitted `{ name, value }` pair, as produced by browser-side form
/// serialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldEntry {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl FieldEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Outcome of validating a whole submission.
///
/// Holds at most one message per field name. The verdict is derived from the
/// error map, so a result is ok exactly when it carries no errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Field name to error message, ordered by field name.
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn into_errors(self) -> BTreeMap<String, String> {
        self.errors
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

/// Validate every entry in submission order.
///
/// Entries are checked independently. If a field name repeats, the error from
/// the last failing occurrence is kept.
pub fn validate_form(entries: &[FieldEntry]) -> ValidationResult {
    let mut errors = BTreeMap::new();

    for entry in entries {
        if let Some(message) = validate_field(&entry.name, &entry.value) {
            errors.insert(entry.name.clone(), message.to_string());
        }
    }

    ValidationResult { errors }
}
