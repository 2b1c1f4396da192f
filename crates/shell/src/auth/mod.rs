//! Authentication against the platform identity provider (Microsoft Entra).
//!
//! # Architecture
//!
//! - [`Tenant`] classifies the deployment hostname once at startup
//! - [`AuthConfig`] is the selected identity-provider configuration,
//!   constructed explicitly from that classification (no globals)
//! - [`token::TokenProvider`] silently exchanges the cached account
//!   credential for API access tokens
//!
//! Two tenant flows exist: the internal (employee) workforce tenant and
//! the external (customer) CIAM tenant. Exactly one [`AuthConfig`] variant
//! is active per process; it is never re-evaluated after startup.

pub mod tenant;
pub mod token;

pub use tenant::Tenant;
pub use token::{TokenOutcome, TokenProvider};

use crate::config::EntraConfig;

/// Identity-provider configuration selected for this deployment.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Which tenant flow this configuration belongs to.
    pub tenant: Tenant,
    /// OAuth client id registered with the identity provider.
    pub client_id: String,
    /// Authority (issuer) base URL.
    pub authority: String,
    /// Redirect URL for interactive sign-in flows.
    pub redirect_url: String,
}

impl AuthConfig {
    /// Select and construct the configuration for a hostname.
    ///
    /// The hostname is injected rather than read from ambient state so the
    /// selection is deterministic under test.
    #[must_use]
    pub fn for_hostname(hostname: &str, entra: &EntraConfig, base_url: &str) -> Self {
        let tenant = Tenant::resolve(hostname);
        let (client_id, authority) = match tenant {
            Tenant::Internal => (
                entra.internal_client_id.clone(),
                format!(
                    "https://login.microsoftonline.com/{}",
                    entra.internal_tenant_id
                ),
            ),
            Tenant::External => (
                entra.external_client_id.clone(),
                format!(
                    "https://{}.ciam.login.microsoftonline.com/{}",
                    entra.external_tenant_name, entra.external_tenant_id
                ),
            ),
        };

        Self {
            tenant,
            client_id,
            authority,
            redirect_url: format!("{}/auth/callback", base_url.trim_end_matches('/')),
        }
    }

    /// The token scope for calls to the platform API.
    #[must_use]
    pub fn api_scope(&self) -> String {
        format!("api://{}/.default", self.client_id)
    }

    /// The token endpoint under this authority.
    #[must_use]
    pub fn token_endpoint(&self) -> String {
        format!("{}/oauth2/v2.0/token", self.authority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entra() -> EntraConfig {
        EntraConfig {
            internal_client_id: "internal-client".to_string(),
            internal_tenant_id: "internal-tenant".to_string(),
            external_client_id: "external-client".to_string(),
            external_tenant_name: "contoso".to_string(),
            external_tenant_id: "external-tenant".to_string(),
            refresh_token: None,
        }
    }

    #[test]
    fn test_admin_hostname_selects_internal_config() {
        let config = AuthConfig::for_hostname("admin.example.com", &entra(), "http://localhost");

        assert_eq!(config.tenant, Tenant::Internal);
        assert_eq!(config.client_id, "internal-client");
        assert_eq!(
            config.authority,
            "https://login.microsoftonline.com/internal-tenant"
        );
    }

    #[test]
    fn test_other_hostname_selects_external_config() {
        let config = AuthConfig::for_hostname("shop.example.com", &entra(), "http://localhost");

        assert_eq!(config.tenant, Tenant::External);
        assert_eq!(config.client_id, "external-client");
        assert_eq!(
            config.authority,
            "https://contoso.ciam.login.microsoftonline.com/external-tenant"
        );
    }

    #[test]
    fn test_api_scope_uses_selected_client_id() {
        let config = AuthConfig::for_hostname("admin.example.com", &entra(), "http://localhost");
        assert_eq!(config.api_scope(), "api://internal-client/.default");
    }

    #[test]
    fn test_redirect_url_joins_callback_path() {
        let config =
            AuthConfig::for_hostname("shop.example.com", &entra(), "http://localhost:3000/");
        assert_eq!(config.redirect_url, "http://localhost:3000/auth/callback");
    }

    #[test]
    fn test_token_endpoint_under_authority() {
        let config = AuthConfig::for_hostname("shop.example.com", &entra(), "http://localhost");
        assert_eq!(
            config.token_endpoint(),
            "https://contoso.ciam.login.microsoftonline.com/external-tenant/oauth2/v2.0/token"
        );
    }
}
