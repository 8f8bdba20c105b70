//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests (`tests/common/mod.rs`) use the exact same middleware
//! stack.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`] with all middleware layers.
///
/// Routing is two-level: axum only separates `/health` from everything else,
/// and [`crate::routing::RouteTable`] resolves GET pages while POST bodies go
/// to the AJAX dispatcher. The request timeout comes from
/// [`ServerConfig::request_timeout_secs`] carried in `state`.
pub fn build_app_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config);
    let request_id_header = HeaderName::from_static("x-request-id");
    let request_timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        // `/health` is static, so it wins over the catch-all front routes.
        .merge(routes::health::router())
        // Pages (GET) and the AJAX dispatcher (POST) on every other path.
        .merge(routes::front_routes())
        // -- Middleware stack (applied bottom-up) --
        // A panicking handler still answers the form with a 500.
        .layer(CatchPanicLayer::new())
        // Cuts off stalled request bodies.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        // Echo the request ID so form submissions can be matched to logs.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // One INFO span per request; dispatcher events are logged inside it.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        // The form page may be served from a separate origin in development.
        .layer(cors)
        .with_state(state)
}

/// CORS for the contact form: GET for pages, POST with a JSON body for the
/// dispatcher. Nothing else is needed cross-origin.
///
/// Panics at startup if any configured origin is invalid.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
