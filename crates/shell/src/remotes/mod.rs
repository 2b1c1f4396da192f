//! Remote micro-frontend composition.
//!
//! Each named remote is an independently deployed service exposing one
//! fragment entry point. The shell defers fetching a remote until its
//! route is activated, bounds the fetch with a timeout, and caches
//! successful fragments for a short window so route re-activation does not
//! re-fetch. Failures are explicit [`RemoteError`] values the routes turn
//! into fallback pages; a remote can never suspend the shell indefinitely.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::RemoteConfig;

/// Fragment TTL in the composition cache.
const FRAGMENT_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// The four named remote views the shell composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteName {
    Orders,
    Products,
    Account,
    Notifications,
}

impl RemoteName {
    /// All remotes, in navigation order.
    pub const ALL: [Self; 4] = [
        Self::Orders,
        Self::Products,
        Self::Account,
        Self::Notifications,
    ];

    /// The shell route the remote is mounted on.
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Orders => "/orders",
            Self::Products => "/products",
            Self::Account => "/account",
            Self::Notifications => "/notifications",
        }
    }

    /// Human-readable view title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Orders => "Orders",
            Self::Products => "Products",
            Self::Account => "Account",
            Self::Notifications => "Notifications",
        }
    }
}

impl std::fmt::Display for RemoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Orders => write!(f, "orders"),
            Self::Products => write!(f, "products"),
            Self::Account => write!(f, "account"),
            Self::Notifications => write!(f, "notifications"),
        }
    }
}

/// Errors from loading a remote fragment.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The fetch did not complete within the configured timeout.
    #[error("remote {remote} did not respond within {}s", .timeout.as_secs())]
    Timeout {
        remote: RemoteName,
        timeout: Duration,
    },

    /// Network-level failure reaching the remote.
    #[error("remote {remote} unreachable: {source}")]
    Unreachable {
        remote: RemoteName,
        source: reqwest::Error,
    },

    /// The remote answered with a non-success status.
    #[error("remote {remote} returned HTTP {status}")]
    Status { remote: RemoteName, status: u16 },
}

impl RemoteError {
    /// Whether the failure is the pending/timeout case rather than a
    /// hard failure.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Registry of configured remotes and their fragment cache.
#[derive(Clone)]
pub struct RemoteRegistry {
    inner: Arc<RemoteRegistryInner>,
}

struct RemoteRegistryInner {
    client: reqwest::Client,
    timeout: Duration,
    cache: Cache<RemoteName, String>,
    orders_url: String,
    products_url: String,
    account_url: String,
    notifications_url: String,
}

impl RemoteRegistry {
    /// Create a registry from the configured remote addresses.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &RemoteConfig, timeout: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(RemoteName::ALL.len() as u64)
            .time_to_live(FRAGMENT_TTL)
            .build();

        Self {
            inner: Arc::new(RemoteRegistryInner {
                client,
                timeout,
                cache,
                orders_url: config.orders_url.clone(),
                products_url: config.products_url.clone(),
                account_url: config.account_url.clone(),
                notifications_url: config.notifications_url.clone(),
            }),
        }
    }

    /// The remote's fragment entry point URL.
    #[must_use]
    pub fn fragment_url(&self, remote: RemoteName) -> String {
        let base = match remote {
            RemoteName::Orders => &self.inner.orders_url,
            RemoteName::Products => &self.inner.products_url,
            RemoteName::Account => &self.inner.account_url,
            RemoteName::Notifications => &self.inner.notifications_url,
        };
        format!("{}/fragment", base.trim_end_matches('/'))
    }

    /// Load a remote's fragment, from cache when fresh.
    ///
    /// The fetch is bounded by the configured timeout; on success the
    /// fragment body is cached for [`FRAGMENT_TTL`].
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Timeout`] when the deadline passes,
    /// [`RemoteError::Unreachable`] on network failure, and
    /// [`RemoteError::Status`] on a non-success response.
    #[instrument(skip(self))]
    pub async fn load(&self, remote: RemoteName) -> Result<String, RemoteError> {
        if let Some(html) = self.inner.cache.get(&remote).await {
            debug!(%remote, "Serving remote fragment from cache");
            return Ok(html);
        }

        let html = match tokio::time::timeout(self.inner.timeout, self.fetch(remote)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(RemoteError::Timeout {
                    remote,
                    timeout: self.inner.timeout,
                });
            }
        };

        self.inner.cache.insert(remote, html.clone()).await;
        Ok(html)
    }

    /// Fetch the fragment body from the remote.
    async fn fetch(&self, remote: RemoteName) -> Result<String, RemoteError> {
        let url = self.fragment_url(remote);
        let response = self
            .inner
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| RemoteError::Unreachable { remote, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                remote,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| RemoteError::Unreachable { remote, source })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn registry(config: &RemoteConfig, timeout: Duration) -> RemoteRegistry {
        RemoteRegistry::new(reqwest::Client::new(), config, timeout)
    }

    fn remote_config(base: &str) -> RemoteConfig {
        RemoteConfig {
            orders_url: base.to_string(),
            products_url: base.to_string(),
            account_url: base.to_string(),
            notifications_url: base.to_string(),
        }
    }

    #[test]
    fn test_fragment_urls_per_remote() {
        let config = RemoteConfig {
            orders_url: "http://localhost:3001".to_string(),
            products_url: "http://localhost:3002/".to_string(),
            account_url: "http://localhost:3003".to_string(),
            notifications_url: "http://localhost:3004".to_string(),
        };
        let registry = registry(&config, Duration::from_secs(5));

        assert_eq!(
            registry.fragment_url(RemoteName::Orders),
            "http://localhost:3001/fragment"
        );
        assert_eq!(
            registry.fragment_url(RemoteName::Products),
            "http://localhost:3002/fragment"
        );
    }

    #[tokio::test]
    async fn test_unreachable_remote_is_explicit_failure() {
        let registry = registry(&remote_config("http://127.0.0.1:9"), Duration::from_secs(5));

        let err = registry.load(RemoteName::Products).await.unwrap_err();
        assert!(matches!(err, RemoteError::Unreachable { .. }));
        assert!(!err.is_timeout());
    }

    #[tokio::test]
    async fn test_slow_remote_times_out() {
        // A listener that accepts but never responds.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let Ok((socket, _)) = listener.accept().await else {
                return;
            };
            // Hold the connection open well past the client timeout.
            tokio::time::sleep(Duration::from_secs(60)).await;
            drop(socket);
        });

        let registry = registry(
            &remote_config(&format!("http://{addr}")),
            Duration::from_millis(100),
        );

        let err = registry.load(RemoteName::Notifications).await.unwrap_err();
        assert!(err.is_timeout());
        assert!(err.to_string().contains("notifications"));
    }
}
