//! Single-field validator.

use super::kinds::FieldKind;
use super::rules::rules_for;

/// Validate one submitted field by name.
///
/// Unknown field names always pass. Returns the error message to report, or
/// `None` when the value is acceptable.
pub fn validate_field(name: &str, value: &str) -> Option<&'static str> {
    FieldKind::parse(name).and_then(|kind| validate_kind(kind, value))
}

/// Validate a value against the rule chain of an already-resolved kind.
///
/// An empty value for an optional kind short-circuits to `None`. Otherwise the
/// message of the last violated rule in the chain wins.
pub fn validate_kind(kind: FieldKind, value: &str) -> Option<&'static str> {
    if value.is_empty() && !kind.is_required() {
        return None;
    }

    rules_for(kind)
        .iter()
        .filter(|rule| (rule.violated)(value))
        .last()
        .map(|rule| rule.message)
}
