use std::sync::Arc;

use crate::config::ServerConfig;
use crate::routing::RouteTable;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (shown on the debug page).
    pub config: Arc<ServerConfig>,
    /// Front controller route rules for GET requests.
    pub route_table: Arc<RouteTable>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            route_table: Arc::new(RouteTable::default()),
        }
    }
}
