//! Integration tests for the CSOM shell.
//!
//! The suite is fully self-contained: each test spins up an in-process
//! stub (the orders API, a remote micro-frontend, or both) on an
//! ephemeral port, points a shell at it, and drives the shell over HTTP
//! with `reqwest`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p csom-integration-tests
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use csom_shell::config::{EntraConfig, RemoteConfig, ShellConfig};
use csom_shell::state::AppState;

/// Serve a router on an ephemeral local port and return its address.
///
/// The server task is detached; it lives for the rest of the test process.
pub async fn serve(router: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub server error");
    });
    addr
}

/// Shell configuration pointing at in-process stubs.
///
/// `api_base_url` is the stub orders API; every remote points at
/// `remotes_base_url`. No account is signed in, so orders API calls go
/// out unauthenticated.
#[must_use]
pub fn shell_config(
    api_base_url: &str,
    remotes_base_url: &str,
    remote_timeout: Duration,
) -> ShellConfig {
    ShellConfig {
        host: "127.0.0.1".parse().expect("valid addr"),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        public_hostname: "localhost".to_string(),
        api_base_url: api_base_url.to_string(),
        entra: EntraConfig {
            internal_client_id: "internal-client".to_string(),
            internal_tenant_id: "internal-tenant".to_string(),
            external_client_id: "external-client".to_string(),
            external_tenant_name: "contoso".to_string(),
            external_tenant_id: "external-tenant".to_string(),
            refresh_token: None,
        },
        remotes: RemoteConfig {
            orders_url: remotes_base_url.to_string(),
            products_url: remotes_base_url.to_string(),
            account_url: remotes_base_url.to_string(),
            notifications_url: remotes_base_url.to_string(),
        },
        remote_timeout,
        sentry_dsn: None,
    }
}

/// Spin up a shell wired to the given stub addresses.
///
/// Returns the shell's base URL.
pub async fn spawn_shell(
    api_base_url: &str,
    remotes_base_url: &str,
    remote_timeout: Duration,
) -> String {
    let config = shell_config(api_base_url, remotes_base_url, remote_timeout);
    let state = AppState::new(config);
    let addr = serve(csom_shell::app(state)).await;
    format!("http://{addr}")
}

/// A reqwest client that does not follow redirects, so tests can assert
/// on the redirect responses themselves.
#[must_use]
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}
