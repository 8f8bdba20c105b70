//! GET handlers behind the front controller route table.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Response};
use contactdesk_core::validation::FieldKind;

use crate::error::AppResult;
use crate::routing::{Action, Route};
use crate::state::AppState;
use crate::views::{self, View, ROBOTS_TXT};

/// Page title of the contact form.
const INDEX_TITLE: &str = "Contact us";

/// GET (any path) -- resolve `/{controller}/{action}` and run the action.
pub async fn front_controller(State(state): State<AppState>, uri: Uri) -> AppResult<Response> {
    let route = Route::from_path(uri.path());
    let action = state.route_table.resolve(&route).inspect_err(|e| {
        tracing::debug!(
            controller = route.controller,
            action = route.action,
            error = %e,
            "No route rule"
        );
    })?;

    Ok(match action {
        Action::Index => index(),
        Action::Robots => robots(),
        Action::Debug => debug(&state),
    })
}

fn index() -> Response {
    let vars = HashMap::from([("title", INDEX_TITLE.to_string())]);
    Html(views::render(View::Index, &vars)).into_response()
}

fn robots() -> Response {
    ([(CONTENT_TYPE, "text/plain; charset=utf-8")], ROBOTS_TXT).into_response()
}

fn debug(state: &AppState) -> Response {
    let field_kinds = FieldKind::ALL
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let vars = HashMap::from([
        ("version", env!("CARGO_PKG_VERSION").to_string()),
        ("field_kinds", field_kinds),
        (
            "request_timeout_secs",
            state.config.request_timeout_secs.to_string(),
        ),
        ("cors_origins", state.config.cors_origins.join(", ")),
    ]);
    Html(views::render(View::Debug, &vars)).into_response()
}
