//! Contact desk front controller library.
//!
//! Exposes the building blocks (config, state, error handling, route table,
//! views, handlers) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod routing;
pub mod state;
pub mod views;
