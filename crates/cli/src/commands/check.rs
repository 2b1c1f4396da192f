//! Configuration check command.
//!
//! Loads the shell configuration exactly the way the shell binary does and
//! reports the resolved tenant and effective endpoints, so a deployment
//! can be validated without binding a port.

use csom_shell::auth::AuthConfig;
use csom_shell::config::{ConfigError, ShellConfig};

/// Load configuration and report the selected tenant.
///
/// # Errors
///
/// Returns `ConfigError` if the environment holds unparseable values.
pub fn run() -> Result<(), ConfigError> {
    let config = ShellConfig::from_env()?;
    let auth = AuthConfig::for_hostname(&config.public_hostname, &config.entra, &config.base_url);

    tracing::info!(
        hostname = %config.public_hostname,
        tenant = %auth.tenant,
        client_id = %auth.client_id,
        authority = %auth.authority,
        "Tenant configuration"
    );
    tracing::info!(
        api_base_url = %config.api_base_url,
        scope = %auth.api_scope(),
        "Orders API"
    );
    tracing::info!(
        orders = %config.remotes.orders_url,
        products = %config.remotes.products_url,
        account = %config.remotes.account_url,
        notifications = %config.remotes.notifications_url,
        timeout_secs = config.remote_timeout.as_secs(),
        "Remotes"
    );

    Ok(())
}
