pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::{ajax, pages};
use crate::state::AppState;

/// Build the front controller route tree.
///
/// Route hierarchy:
///
/// ```text
/// GET  /               front controller (Application/index)
/// GET  /{*path}        front controller (/{controller}/{action})
/// POST /               AJAX dispatcher
/// POST /{*path}        AJAX dispatcher
/// ```
///
/// Controller/action resolution happens in [`crate::routing::RouteTable`],
/// not here, so the table stays the single source of page routes.
pub fn front_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::front_controller).post(ajax::dispatch))
        .route("/{*path}", get(pages::front_controller).post(ajax::dispatch))
}
