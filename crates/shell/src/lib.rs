//! CSOM Shell library.
//!
//! This crate provides the shell functionality as a library, allowing it
//! to be driven by the binary, the CLI, and the integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod orders;
pub mod remotes;
pub mod routes;
pub mod state;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the shell application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/health/ready", get(routes::readiness))
        .merge(routes::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(
                    middleware::request_id_middleware,
                )),
        )
        .with_state(state)
}
