//! Session-related types.
//!
//! There is no server-side session store. A visitor is logged in exactly when
//! the request carries a non-empty `username` cookie.

use core::fmt;

/// Name of the cookie carrying the logged-in username.
pub const SESSION_COOKIE_NAME: &str = "username";

/// The user named by the session cookie.
///
/// The value is whatever the browser sent; it is not signed, so treat it as
/// untrusted input when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser(String);

impl SessionUser {
    /// Wrap a cookie value. Empty values do not form a session.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Option<Self> {
        let username = username.into();
        (!username.is_empty()).then_some(Self(username))
    }

    /// The username carried by the cookie.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
