//! Login and logout route handlers.
//!
//! A successful `POST /login` hands the browser a `username` cookie; every
//! later request is treated as logged in while that cookie is present.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{OptionalSession, clear_session_cookie, set_session_cookie};
use crate::models::SessionUser;
use crate::services::auth::authenticate;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
///
/// Missing fields deserialize as empty strings and are rejected like any
/// other wrong pair.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login form page.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {}

/// Greeting shown on `GET /login` when a session already exists.
#[derive(Template, WebTemplate)]
#[template(path = "auth/welcome.html")]
pub struct WelcomeTemplate {
    pub user: SessionUser,
}

/// Page shown after a successful login.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login_success.html")]
pub struct LoginSuccessTemplate {
    pub username: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the login form, or a greeting if already logged in.
#[instrument(skip_all)]
pub async fn login_page(OptionalSession(user): OptionalSession) -> Response {
    match user {
        Some(user) => WelcomeTemplate { user }.into_response(),
        None => LoginTemplate {}.into_response(),
    }
}

/// Handle a login form submission.
///
/// # Errors
///
/// Returns `AppError::Auth` (401) when the pair does not match the configured
/// account. No cookie is set in that case.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    if let Err(e) = authenticate(state.credentials(), &form.user, &form.password) {
        tracing::warn!(user = %form.user, "Login failed: {}", e);
        return Err(e.into());
    }

    tracing::info!(user = %form.user, "Login succeeded");
    set_sentry_user(&form.user);

    let jar = set_session_cookie(jar, &form.user);
    Ok((
        jar,
        LoginSuccessTemplate {
            username: form.user,
        },
    )
        .into_response())
}

/// Drop the session cookie and go back to the login form.
#[instrument(skip_all)]
pub async fn logout(jar: CookieJar) -> Response {
    clear_sentry_user();
    (clear_session_cookie(jar), Redirect::to("/login")).into_response()
}
