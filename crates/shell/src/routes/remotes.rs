//! Routes for the composed remote views.
//!
//! Each handler lazily loads its remote's fragment on route activation.
//! A timeout renders the per-remote loading fallback (which retries via
//! refresh); any other failure renders the error boundary page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::instrument;

use crate::remotes::RemoteName;
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "remote.html")]
struct RemoteTemplate {
    name: RemoteName,
    title: &'static str,
    fragment: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "remote_pending.html")]
struct RemotePendingTemplate {
    title: &'static str,
}

#[derive(Template, WebTemplate)]
#[template(path = "remote_error.html")]
struct RemoteErrorTemplate {
    name: RemoteName,
    title: &'static str,
}

/// GET `/products`
pub async fn products(State(state): State<AppState>) -> Response {
    remote_page(&state, RemoteName::Products).await
}

/// GET `/account`
pub async fn account(State(state): State<AppState>) -> Response {
    remote_page(&state, RemoteName::Account).await
}

/// GET `/notifications`
pub async fn notifications(State(state): State<AppState>) -> Response {
    remote_page(&state, RemoteName::Notifications).await
}

/// Load a remote and render it, or its fallback.
#[instrument(skip(state))]
async fn remote_page(state: &AppState, remote: RemoteName) -> Response {
    match state.remotes().load(remote).await {
        Ok(fragment) => RemoteTemplate {
            name: remote,
            title: remote.title(),
            fragment,
        }
        .into_response(),
        Err(err) if err.is_timeout() => {
            tracing::warn!(%remote, error = %err, "Remote fragment pending past deadline");
            RemotePendingTemplate {
                title: remote.title(),
            }
            .into_response()
        }
        Err(err) => {
            tracing::error!(%remote, error = %err, "Remote fragment failed to load");
            sentry::capture_error(&err);
            (
                StatusCode::BAD_GATEWAY,
                RemoteErrorTemplate {
                    name: remote,
                    title: remote.title(),
                },
            )
                .into_response()
        }
    }
}
