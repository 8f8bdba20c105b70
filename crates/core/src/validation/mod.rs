//! Contact form validation engine.
//!
//! Provides the recognized field kinds, the per-kind rule registry, a
//! single-field validator and the whole-form evaluator. Nothing in here
//! touches the network or shared state; every call works on its own input.

pub mod field;
pub mod form;
pub mod kinds;
pub mod rules;

pub use field::{validate_field, validate_kind};
pub use form::{validate_form, FieldEntry, ValidationResult};
pub use kinds::FieldKind;
