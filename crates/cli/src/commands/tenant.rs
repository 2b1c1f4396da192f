//! Tenant classification command.

use csom_shell::auth::Tenant;

/// Classify a hostname into its tenant flow.
pub fn run(hostname: &str) {
    let tenant = Tenant::resolve(hostname);
    tracing::info!(%hostname, %tenant, "Classified");
}
