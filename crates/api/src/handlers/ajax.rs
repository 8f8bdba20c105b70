//! AJAX dispatcher.
//!
//! Every POST is an AJAX call carrying a JSON object of the form
//! `{ "method": <name>, "data": <payload> }`. The dispatcher checks the
//! envelope, routes on `method` and returns the method's JSON reply.

use axum::body::Bytes;
use axum::Json;
use contactdesk_core::validation::{validate_form, FieldEntry};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::response::FormSubmitResponse;

/// Methods the dispatcher knows how to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AjaxRequest {
    /// Validate a serialized contact form.
    FormSubmit(Vec<FieldEntry>),
}

/// Decode and route an AJAX request body.
///
/// - blank body, `null` or `{}` -> [`AppError::EmptyRequest`]
/// - object without `method` -> [`AppError::UnspecifiedMethod`]
/// - unrecognized `method` -> [`AppError::UnknownMethod`]
pub fn parse_request(body: &[u8]) -> AppResult<AjaxRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::EmptyRequest);
    }

    let payload: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Malformed JSON body: {e}")))?;

    let mut object = match payload {
        Value::Null => return Err(AppError::EmptyRequest),
        Value::Object(map) if map.is_empty() => return Err(AppError::EmptyRequest),
        Value::Object(map) => map,
        _ => {
            return Err(AppError::BadRequest(
                "Request body must be a JSON object".to_string(),
            ))
        }
    };

    let method = match object.get("method") {
        None | Some(Value::Null) => return Err(AppError::UnspecifiedMethod),
        Some(Value::String(name)) => name.clone(),
        Some(other) => return Err(AppError::UnknownMethod(other.to_string())),
    };

    match method.as_str() {
        "formSubmit" => Ok(AjaxRequest::FormSubmit(take_entries(&mut object)?)),
        _ => Err(AppError::UnknownMethod(method)),
    }
}

/// Pull the `data` array out of the envelope. Absent or `null` data is an
/// empty submission.
fn take_entries(object: &mut Map<String, Value>) -> AppResult<Vec<FieldEntry>> {
    match object.remove("data") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(data) => serde_json::from_value(data)
            .map_err(|e| AppError::BadRequest(format!("Malformed form data: {e}"))),
    }
}

/// POST (any path) -- run the requested AJAX method.
pub async fn dispatch(body: Bytes) -> AppResult<Json<FormSubmitResponse>> {
    let request = parse_request(&body).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected AJAX request");
    })?;

    match request {
        AjaxRequest::FormSubmit(entries) => Ok(Json(form_submit(&entries))),
    }
}

/// Validate a serialized contact form.
pub fn form_submit(entries: &[FieldEntry]) -> FormSubmitResponse {
    let result = validate_form(entries);

    tracing::info!(
        fields = entries.len(),
        valid = result.is_ok(),
        errors = result.errors().len(),
        "Form submission validated"
    );

    result.into()
}
