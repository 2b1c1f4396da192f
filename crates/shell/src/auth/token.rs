//! Silent token acquisition against the Entra token endpoint.
//!
//! The provider holds the cached account credential (a refresh token) and
//! exchanges it for API access tokens without user interaction. Acquisition
//! never raises: the result is an explicit [`TokenOutcome`] and callers
//! decide policy for the non-authenticated variants.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::instrument;

use super::AuthConfig;

/// Tokens within this many seconds of expiry are refreshed eagerly.
const EXPIRY_BUFFER_SECS: i64 = 60;

/// Outcome of a token acquisition attempt.
///
/// There is deliberately no error variant to catch: a failed acquisition
/// is a value, and the caller chooses between blocking and proceeding
/// unauthenticated.
#[derive(Debug, Clone)]
pub enum TokenOutcome {
    /// A valid access token scoped to the platform API.
    Authenticated(SecretString),
    /// No account is signed in; no network call was made.
    Anonymous,
    /// An account exists but the silent exchange failed.
    Failed(String),
}

impl TokenOutcome {
    /// Whether an access token was obtained.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Errors from the token endpoint exchange.
///
/// Internal to the provider: they are folded into
/// [`TokenOutcome::Failed`] before reaching callers.
#[derive(Debug, Error)]
enum TokenError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("token endpoint returned {status}: {message}")]
    Endpoint { status: u16, message: String },
}

/// Access token with its expiry instant.
#[derive(Debug, Clone)]
struct CachedToken {
    access_token: SecretString,
    /// Unix timestamp when the access token expires.
    expires_at: i64,
}

impl CachedToken {
    /// Check if the access token has expired (with refresh buffer).
    fn is_expired(&self) -> bool {
        let now = chrono::Utc::now().timestamp();
        now >= self.expires_at - EXPIRY_BUFFER_SECS
    }
}

/// Request body for the refresh-token grant.
#[derive(serde::Serialize)]
struct RefreshRequest<'a> {
    client_id: &'a str,
    grant_type: &'static str,
    refresh_token: &'a str,
    scope: &'a str,
}

/// Success response from the token endpoint.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    /// Token lifetime in seconds.
    expires_in: i64,
}

/// Error response from the token endpoint.
#[derive(Deserialize)]
struct TokenErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Silent token provider for the selected tenant.
pub struct TokenProvider {
    client: reqwest::Client,
    auth: AuthConfig,
    /// The signed-in account's refresh credential, if any.
    account: Option<SecretString>,
    cache: Mutex<Option<CachedToken>>,
}

impl TokenProvider {
    /// Create a provider for the given tenant configuration.
    ///
    /// `account` is the cached refresh credential; `None` means no account
    /// is signed in and every acquisition resolves to
    /// [`TokenOutcome::Anonymous`].
    #[must_use]
    pub const fn new(
        client: reqwest::Client,
        auth: AuthConfig,
        account: Option<SecretString>,
    ) -> Self {
        Self {
            client,
            auth,
            account,
            cache: Mutex::const_new(None),
        }
    }

    /// Silently acquire an access token scoped to the platform API.
    ///
    /// Returns a cached token when one is valid, otherwise redeems the
    /// refresh credential at the token endpoint. Failures are logged and
    /// returned as [`TokenOutcome::Failed`]; they are never raised.
    #[instrument(skip(self), fields(tenant = %self.auth.tenant))]
    pub async fn acquire_token(&self) -> TokenOutcome {
        let Some(account) = &self.account else {
            return TokenOutcome::Anonymous;
        };

        let mut cache = self.cache.lock().await;
        if let Some(token) = cache.as_ref()
            && !token.is_expired()
        {
            return TokenOutcome::Authenticated(token.access_token.clone());
        }

        match self.redeem(account).await {
            Ok(token) => {
                let access_token = token.access_token.clone();
                *cache = Some(token);
                TokenOutcome::Authenticated(access_token)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Silent token acquisition failed");
                TokenOutcome::Failed(err.to_string())
            }
        }
    }

    /// Redeem the refresh credential for an access token.
    async fn redeem(&self, refresh_token: &SecretString) -> Result<CachedToken, TokenError> {
        let now = chrono::Utc::now().timestamp();
        let scope = self.auth.api_scope();

        let response = self
            .client
            .post(self.auth.token_endpoint())
            .form(&RefreshRequest {
                client_id: &self.auth.client_id,
                grant_type: "refresh_token",
                refresh_token: refresh_token.expose_secret(),
                scope: &scope,
            })
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let token_response: TokenResponse = response.json().await?;
            Ok(CachedToken {
                access_token: SecretString::from(token_response.access_token),
                expires_at: now + token_response.expires_in,
            })
        } else {
            let error_response: TokenErrorResponse =
                response.json().await.unwrap_or(TokenErrorResponse {
                    error: None,
                    error_description: None,
                });

            let message = error_response
                .error_description
                .or(error_response.error)
                .unwrap_or_else(|| "no error details provided".to_string());

            Err(TokenError::Endpoint {
                status: status.as_u16(),
                message,
            })
        }
    }
}
