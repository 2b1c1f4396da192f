//! Orders API client.
//!
//! # Architecture
//!
//! - Plain REST JSON against `{API_BASE_URL}/api/v1/orders`
//! - Bearer token attached from the [`TokenOutcome`] the caller acquired;
//!   non-authenticated outcomes proceed without an Authorization header
//!   and are logged at warn level
//! - No retry, no backoff, no response caching, no idempotency key on
//!   create; non-2xx responses collapse to one generic error path
//!
//! [`OrdersApi`] is the seam the view controller is written against, so
//! view-state transitions are testable without a live API.

pub mod view;

use std::sync::Arc;

use csom_core::{Order, OrderDraft};
use thiserror::Error;
use tracing::instrument;

use crate::auth::TokenOutcome;

/// Errors that can occur when calling the orders API.
#[derive(Debug, Error)]
pub enum OrdersError {
    /// Network-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("orders API returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Read and create operations on the orders collection.
pub trait OrdersApi {
    /// List the caller's orders, optionally filtered by status.
    fn fetch_orders(
        &self,
        status: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Order>, OrdersError>> + Send;

    /// Create an order from a draft and return the created resource.
    fn create_order(
        &self,
        draft: &OrderDraft,
    ) -> impl Future<Output = Result<Order, OrdersError>> + Send;
}

/// Client for the orders API.
#[derive(Clone)]
pub struct OrdersClient {
    inner: Arc<OrdersClientInner>,
}

struct OrdersClientInner {
    client: reqwest::Client,
    /// Collection endpoint, built once from the configured base URL.
    endpoint: String,
    token: TokenOutcome,
}

impl OrdersClient {
    /// Create a client for the given API base URL.
    ///
    /// `token` is the acquisition outcome for this request flow; the
    /// client downgrades to unauthenticated calls when it is not
    /// [`TokenOutcome::Authenticated`].
    #[must_use]
    pub fn new(client: reqwest::Client, api_base_url: &str, token: TokenOutcome) -> Self {
        let endpoint = format!("{}/api/v1/orders", api_base_url.trim_end_matches('/'));
        Self {
            inner: Arc::new(OrdersClientInner {
                client,
                endpoint,
                token,
            }),
        }
    }

    /// Attach the bearer token when one was acquired.
    ///
    /// The non-authenticated outcomes proceed without the header rather
    /// than sending a placeholder bearer value; the downgrade is logged.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.inner.token {
            TokenOutcome::Authenticated(token) => {
                use secrecy::ExposeSecret;
                request.bearer_auth(token.expose_secret())
            }
            TokenOutcome::Anonymous => {
                tracing::warn!("No signed-in account; calling orders API unauthenticated");
                request
            }
            TokenOutcome::Failed(reason) => {
                tracing::warn!(reason = %reason, "Token acquisition failed; calling orders API unauthenticated");
                request
            }
        }
    }

    /// Read the response body as the expected JSON type, folding non-2xx
    /// statuses into [`OrdersError::Api`].
    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, OrdersError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "no response body".to_string());
            return Err(OrdersError::Api {
                status: status.as_u16(),
                message: message.chars().take(200).collect(),
            });
        }
        Ok(response.json().await?)
    }
}

impl OrdersApi for OrdersClient {
    #[instrument(skip(self))]
    async fn fetch_orders(&self, status: Option<&str>) -> Result<Vec<Order>, OrdersError> {
        let mut request = self.inner.client.get(&self.inner.endpoint);
        if let Some(status) = status {
            request = request.query(&[("status", status)]);
        }

        let response = self.authorize(request).send().await?;
        Self::read_json(response).await
    }

    #[instrument(skip(self, draft), fields(items = draft.items.len()))]
    async fn create_order(&self, draft: &OrderDraft) -> Result<Order, OrdersError> {
        let request = self.inner.client.post(&self.inner.endpoint).json(draft);

        let response = self.authorize(request).send().await?;
        Self::read_json(response).await
    }
}
