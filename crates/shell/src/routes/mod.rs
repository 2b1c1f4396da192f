//! HTTP routes for the shell.
//!
//! `/orders` is served natively by the orders view controller; the other
//! named views are composed from their remotes at request time.

pub mod home;
pub mod orders;
pub mod remotes;

use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// All shell routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/orders", get(orders::list))
        .route("/orders/create", post(orders::create))
        .route("/products", get(remotes::products))
        .route("/account", get(remotes::account))
        .route("/notifications", get(remotes::notifications))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the orders API base URL is reachable before returning OK.
/// Returns 503 Service Unavailable otherwise.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    let probe = state.http().get(state.config().api_base_url.as_str()).send();
    match tokio::time::timeout(Duration::from_secs(2), probe).await {
        Ok(Ok(_)) => StatusCode::OK,
        _ => StatusCode::SERVICE_UNAVAILABLE,
    }
}
