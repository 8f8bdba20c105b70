//! Response payloads returned by the AJAX dispatcher.

use std::collections::BTreeMap;

use contactdesk_core::validation::ValidationResult;
use serde::Serialize;

/// Wire shape of a `formSubmit` reply.
///
/// `result` is the overall verdict and `error` maps field names to messages.
/// `error` serializes as an empty object when the submission is valid.
#[derive(Debug, Serialize)]
pub struct FormSubmitResponse {
    pub result: bool,
    pub error: BTreeMap<String, String>,
}

impl From<ValidationResult> for FormSubmitResponse {
    fn from(result: ValidationResult) -> Self {
        Self {
            result: result.is_ok(),
            error: result.into_errors(),
        }
    }
}
