use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent `{ "error", "code" }`
/// JSON error responses. The `error` strings of the dispatcher variants are
/// part of the client contract and must not change.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The AJAX payload was empty.
    #[error("Empty request!")]
    EmptyRequest,

    /// The AJAX payload carried no `method` discriminator.
    #[error("Unspecified method!")]
    UnspecifiedMethod,

    /// The AJAX `method` is not one the dispatcher handles.
    #[error("Unknown method")]
    UnknownMethod(String),

    /// No route rule exists for the requested controller.
    #[error("controller not found")]
    ControllerNotFound(String),

    /// The controller exists but has no such action.
    #[error("action not found")]
    ActionNotFound { controller: String, action: String },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- Dispatcher errors ---
            AppError::EmptyRequest => (StatusCode::BAD_REQUEST, "EMPTY_REQUEST", self.to_string()),
            AppError::UnspecifiedMethod => (
                StatusCode::BAD_REQUEST,
                "UNSPECIFIED_METHOD",
                self.to_string(),
            ),
            AppError::UnknownMethod(_) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_METHOD", self.to_string())
            }

            // --- Routing errors ---
            AppError::ControllerNotFound(_) | AppError::ActionNotFound { .. } => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string())
            }

            // --- Malformed payloads ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
