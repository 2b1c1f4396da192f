//! Shell configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables have documented fallback defaults so a development shell
//! boots with no environment at all.
//!
//! ## Shell
//! - `SHELL_HOST` - Bind address (default: 127.0.0.1)
//! - `SHELL_PORT` - Listen port (default: 3000)
//! - `SHELL_BASE_URL` - Public base URL (default: http://localhost:3000)
//! - `SHELL_PUBLIC_HOSTNAME` - Hostname the tenant resolver classifies
//!   (default: the host of `SHELL_BASE_URL`)
//!
//! ## Orders API
//! - `API_BASE_URL` - Orders API base URL (default: https://api.example.com)
//!
//! ## Identity provider (Entra)
//! - `ENTRA_INTERNAL_CLIENT_ID` (default: your-internal-client-id)
//! - `ENTRA_INTERNAL_TENANT_ID` (default: your-internal-tenant-id)
//! - `ENTRA_EXTERNAL_CLIENT_ID` (default: your-external-client-id)
//! - `ENTRA_EXTERNAL_TENANT_NAME` (default: your-tenant)
//! - `ENTRA_EXTERNAL_TENANT_ID` (default: your-external-tenant-id)
//! - `ENTRA_REFRESH_TOKEN` - Optional cached account credential; its
//!   presence is what makes the shell "signed in"
//!
//! ## Remotes
//! - `ORDERS_MFE_URL` (default: http://localhost:3001)
//! - `PRODUCTS_MFE_URL` (default: http://localhost:3002)
//! - `ACCOUNT_MFE_URL` (default: http://localhost:3003)
//! - `NOTIFICATIONS_MFE_URL` (default: http://localhost:3004)
//! - `REMOTE_TIMEOUT_SECS` - Per-remote fragment fetch timeout (default: 5)
//!
//! ## Observability
//! - `SENTRY_DSN` - Sentry error tracking DSN (optional)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shell application configuration.
///
/// Constructed explicitly via [`ShellConfig::from_env`]; tenant selection
/// happens once, downstream, from `public_hostname`. No module-scope state.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the shell
    pub base_url: String,
    /// Hostname used for tenant classification
    pub public_hostname: String,
    /// Orders API base URL
    pub api_base_url: String,
    /// Identity provider configuration for both tenants
    pub entra: EntraConfig,
    /// Remote micro-frontend addresses
    pub remotes: RemoteConfig,
    /// Per-remote fragment fetch timeout
    pub remote_timeout: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Entra identity provider settings for the two tenant flows.
///
/// Implements `Debug` manually to redact the refresh token.
#[derive(Clone)]
pub struct EntraConfig {
    /// Client id for the internal (employee) tenant
    pub internal_client_id: String,
    /// Directory id for the internal tenant
    pub internal_tenant_id: String,
    /// Client id for the external (customer) tenant
    pub external_client_id: String,
    /// CIAM tenant name for the external tenant
    pub external_tenant_name: String,
    /// Directory id for the external tenant
    pub external_tenant_id: String,
    /// Cached account credential, if the shell is signed in
    pub refresh_token: Option<SecretString>,
}

impl std::fmt::Debug for EntraConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntraConfig")
            .field("internal_client_id", &self.internal_client_id)
            .field("internal_tenant_id", &self.internal_tenant_id)
            .field("external_client_id", &self.external_client_id)
            .field("external_tenant_name", &self.external_tenant_name)
            .field("external_tenant_id", &self.external_tenant_id)
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Base URLs for the four named remotes.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub orders_url: String,
    pub products_url: String,
    pub account_url: String,
    pub notifications_url: String,
}

impl ShellConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable
    /// (bind address, port, timeout, base URL).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SHELL_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHELL_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SHELL_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHELL_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("SHELL_BASE_URL", "http://localhost:3000");

        // The tenant resolver classifies SHELL_PUBLIC_HOSTNAME; when unset,
        // fall back to the host of the public base URL.
        let public_hostname = match get_optional_env("SHELL_PUBLIC_HOSTNAME") {
            Some(hostname) => hostname,
            None => host_of(&base_url)
                .map_err(|e| ConfigError::InvalidEnvVar("SHELL_BASE_URL".to_string(), e))?,
        };

        let remote_timeout_secs = get_env_or_default("REMOTE_TIMEOUT_SECS", "5")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("REMOTE_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            host,
            port,
            base_url,
            public_hostname,
            api_base_url: get_env_or_default("API_BASE_URL", "https://api.example.com"),
            entra: EntraConfig::from_env(),
            remotes: RemoteConfig::from_env(),
            remote_timeout: Duration::from_secs(remote_timeout_secs),
            sentry_dsn: get_optional_env("SENTRY_DSN"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl EntraConfig {
    fn from_env() -> Self {
        Self {
            internal_client_id: get_env_or_default(
                "ENTRA_INTERNAL_CLIENT_ID",
                "your-internal-client-id",
            ),
            internal_tenant_id: get_env_or_default(
                "ENTRA_INTERNAL_TENANT_ID",
                "your-internal-tenant-id",
            ),
            external_client_id: get_env_or_default(
                "ENTRA_EXTERNAL_CLIENT_ID",
                "your-external-client-id",
            ),
            external_tenant_name: get_env_or_default("ENTRA_EXTERNAL_TENANT_NAME", "your-tenant"),
            external_tenant_id: get_env_or_default(
                "ENTRA_EXTERNAL_TENANT_ID",
                "your-external-tenant-id",
            ),
            refresh_token: get_optional_env("ENTRA_REFRESH_TOKEN").map(SecretString::from),
        }
    }
}

impl RemoteConfig {
    fn from_env() -> Self {
        Self {
            orders_url: get_env_or_default("ORDERS_MFE_URL", "http://localhost:3001"),
            products_url: get_env_or_default("PRODUCTS_MFE_URL", "http://localhost:3002"),
            account_url: get_env_or_default("ACCOUNT_MFE_URL", "http://localhost:3003"),
            notifications_url: get_env_or_default("NOTIFICATIONS_MFE_URL", "http://localhost:3004"),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Extract the host component of a URL.
fn host_of(base_url: &str) -> Result<String, String> {
    let url = Url::parse(base_url).map_err(|e| e.to_string())?;
    url.host_str()
        .map(String::from)
        .ok_or_else(|| "base URL must have a host".to_string())
}
