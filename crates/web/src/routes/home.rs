//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;
use crate::middleware::OptionalSession;
use crate::models::SessionUser;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub user: Option<SessionUser>,
}

/// Display the home page with links to the login form and the catalog.
#[instrument(skip_all)]
pub async fn home(OptionalSession(user): OptionalSession) -> impl IntoResponse {
    HomeTemplate { user }
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
pub async fn health() -> &'static str {
    "ok"
}
