//! Session extractor and cookie helpers.
//!
//! The session is derived on every request from the `username` cookie; no
//! handler parses cookies itself.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::COOKIE, request::Parts},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::models::{SESSION_COOKIE_NAME, SessionUser};

/// Resolve the session from request headers.
///
/// Returns the percent-decoded value of the first `username` cookie in header
/// order, matching the encoding applied by [`set_session_cookie`]. Absent,
/// empty, non-UTF-8 or malformed cookie headers never fail; they just yield no
/// session.
#[must_use]
pub fn resolve_session(headers: &HeaderMap) -> Option<SessionUser> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse_encoded)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .and_then(|cookie| SessionUser::new(cookie.value()))
}

/// Extractor that optionally gets the session user.
///
/// Never rejects: a request without the cookie is simply anonymous.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(OptionalSession(user): OptionalSession) -> impl IntoResponse {
///     match user {
///         Some(u) => format!("Hello, {u}!"),
///         None => "Hello, guest!".to_string(),
///     }
/// }
/// ```
pub struct OptionalSession(pub Option<SessionUser>);

impl OptionalSession {
    /// Whether the visitor is logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.0.is_some()
    }
}

impl<S> FromRequestParts<S> for OptionalSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(resolve_session(&parts.headers)))
    }
}

/// Add the session cookie for `username` to the jar.
///
/// The cookie is a plain name/value pair scoped to the whole site, with no
/// expiry.
#[must_use]
pub fn set_session_cookie(jar: CookieJar, username: &str) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE_NAME, username.to_owned()))
        .path("/")
        .build();
    jar.add(cookie)
}

/// Add a removal cookie for the session to the jar (logout).
#[must_use]
pub fn clear_session_cookie(jar: CookieJar) -> CookieJar {
    let mut cookie = Cookie::build((SESSION_COOKIE_NAME, "")).path("/").build();
    cookie.make_removal();
    jar.add(cookie)
}
