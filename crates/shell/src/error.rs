//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. Route handlers return
//! `Result<T, AppError>`; view-level failures (the orders list error
//! state, remote fallbacks) are rendered by the routes themselves and
//! never pass through here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use csom_core::DraftError;

use crate::orders::OrdersError;

/// Application-level error type for the shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// Orders API operation failed.
    #[error("Orders API error: {0}")]
    Orders(#[from] OrdersError),

    /// Submitted order draft failed validation.
    #[error("Invalid order draft: {0}")]
    Draft(#[from] DraftError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server-side errors to Sentry
        if matches!(self, Self::Orders(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Orders(_) => StatusCode::BAD_GATEWAY,
            Self::Draft(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Orders(_) => "Upstream service error".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
            Self::Draft(err) => err.to_string(),
            Self::BadRequest(message) => format!("Bad request: {message}"),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");

        let err = AppError::Draft(DraftError::EmptyItems);
        assert_eq!(err.to_string(), "Invalid order draft: order items cannot be empty");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            status_of(AppError::Orders(OrdersError::Api {
                status: 500,
                message: "boom".to_string()
            })),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(AppError::Draft(DraftError::EmptyItems)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_details_not_exposed() {
        let err = AppError::Orders(OrdersError::Api {
            status: 500,
            message: "connection string postgres://secret".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
