//! Application state shared across handlers.

use std::sync::Arc;

use crate::auth::{AuthConfig, TokenOutcome, TokenProvider};
use crate::config::ShellConfig;
use crate::orders::OrdersClient;
use crate::remotes::RemoteRegistry;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the tenant's auth configuration, the token provider,
/// and the remote registry. The tenant is resolved exactly once, when the
/// state is constructed.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ShellConfig,
    auth: AuthConfig,
    tokens: TokenProvider,
    remotes: RemoteRegistry,
    http: reqwest::Client,
}

impl AppState {
    /// Create a new application state from configuration.
    ///
    /// Resolves the tenant from `config.public_hostname` and constructs
    /// the selected [`AuthConfig`]; neither is re-evaluated afterward.
    #[must_use]
    pub fn new(config: ShellConfig) -> Self {
        let http = reqwest::Client::new();
        let auth = AuthConfig::for_hostname(&config.public_hostname, &config.entra, &config.base_url);
        let tokens = TokenProvider::new(
            http.clone(),
            auth.clone(),
            config.entra.refresh_token.clone(),
        );
        let remotes = RemoteRegistry::new(http.clone(), &config.remotes, config.remote_timeout);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                auth,
                tokens,
                remotes,
                http,
            }),
        }
    }

    /// Get a reference to the shell configuration.
    #[must_use]
    pub fn config(&self) -> &ShellConfig {
        &self.inner.config
    }

    /// Get the tenant's identity-provider configuration.
    #[must_use]
    pub fn auth(&self) -> &AuthConfig {
        &self.inner.auth
    }

    /// Get the silent token provider.
    #[must_use]
    pub fn tokens(&self) -> &TokenProvider {
        &self.inner.tokens
    }

    /// Get the remote micro-frontend registry.
    #[must_use]
    pub fn remotes(&self) -> &RemoteRegistry {
        &self.inner.remotes
    }

    /// Get the shared HTTP client.
    #[must_use]
    pub fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    /// Build an orders client carrying the given acquisition outcome.
    #[must_use]
    pub fn orders_client(&self, token: TokenOutcome) -> OrdersClient {
        OrdersClient::new(self.inner.http.clone(), &self.inner.config.api_base_url, token)
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Tenant;
    use crate::config::{EntraConfig, RemoteConfig};

    use super::*;

    fn config(hostname: &str) -> ShellConfig {
        ShellConfig {
            host: "127.0.0.1".parse().expect("valid addr"),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            public_hostname: hostname.to_string(),
            api_base_url: "https://api.example.com".to_string(),
            entra: EntraConfig {
                internal_client_id: "internal-client".to_string(),
                internal_tenant_id: "internal-tenant".to_string(),
                external_client_id: "external-client".to_string(),
                external_tenant_name: "contoso".to_string(),
                external_tenant_id: "external-tenant".to_string(),
                refresh_token: None,
            },
            remotes: RemoteConfig {
                orders_url: "http://localhost:3001".to_string(),
                products_url: "http://localhost:3002".to_string(),
                account_url: "http://localhost:3003".to_string(),
                notifications_url: "http://localhost:3004".to_string(),
            },
            remote_timeout: std::time::Duration::from_secs(5),
            sentry_dsn: None,
        }
    }

    #[test]
    fn test_tenant_resolved_once_at_construction() {
        let state = AppState::new(config("admin.example.com"));
        assert_eq!(state.auth().tenant, Tenant::Internal);
        assert_eq!(state.auth().client_id, "internal-client");

        let state = AppState::new(config("shop.example.com"));
        assert_eq!(state.auth().tenant, Tenant::External);
        assert_eq!(state.auth().client_id, "external-client");
    }
}
