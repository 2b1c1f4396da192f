//! Remote health probe command.
//!
//! Fetches every remote's fragment entry point through the same registry
//! the shell uses, so probe results reflect what a route activation would
//! see (timeouts included).

use thiserror::Error;

use csom_shell::config::{ConfigError, ShellConfig};
use csom_shell::remotes::{RemoteName, RemoteRegistry};

/// Errors from the probe command.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{failed} of {total} remotes failed")]
    RemotesDown { failed: usize, total: usize },
}

/// Fetch each remote's fragment and report health.
///
/// # Errors
///
/// Returns `ProbeError::RemotesDown` if any remote fails to serve its
/// fragment within the configured timeout.
pub async fn run() -> Result<(), ProbeError> {
    let config = ShellConfig::from_env()?;
    let registry = RemoteRegistry::new(
        reqwest::Client::new(),
        &config.remotes,
        config.remote_timeout,
    );

    let mut failed = 0usize;
    for remote in RemoteName::ALL {
        match registry.load(remote).await {
            Ok(fragment) => {
                tracing::info!(%remote, bytes = fragment.len(), "Remote healthy");
            }
            Err(err) => {
                failed += 1;
                tracing::warn!(%remote, error = %err, "Remote failed");
            }
        }
    }

    if failed > 0 {
        return Err(ProbeError::RemotesDown {
            failed,
            total: RemoteName::ALL.len(),
        });
    }
    Ok(())
}
