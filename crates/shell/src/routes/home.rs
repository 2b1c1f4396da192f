//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::auth::Tenant;
use crate::remotes::RemoteName;
use crate::state::AppState;

/// A navigation entry for one composed view.
struct NavEntry {
    route: &'static str,
    title: &'static str,
}

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
struct HomeTemplate {
    tenant: Tenant,
    views: Vec<NavEntry>,
}

/// GET `/` - landing page listing the composed views.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        tenant: state.auth().tenant,
        views: RemoteName::ALL
            .iter()
            .map(|remote| NavEntry {
                route: remote.route(),
                title: remote.title(),
            })
            .collect(),
    }
}
