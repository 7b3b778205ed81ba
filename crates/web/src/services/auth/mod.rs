//! Authentication service.
//!
//! The login form accepts exactly one account, taken from configuration.
//! Verification goes through the [`CredentialVerifier`] trait so handlers can
//! be exercised with any account in tests.

mod error;

pub use error::AuthError;

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::config::LoginConfig;

/// Checks a submitted username/password pair.
pub trait CredentialVerifier: Send + Sync {
    /// Returns `true` only when both values match exactly, byte for byte.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Verifier holding a single fixed account.
pub struct StaticCredentials {
    username: String,
    password: SecretString,
}

impl StaticCredentials {
    /// Create a verifier for one account.
    #[must_use]
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// Create a verifier for the account configured for the login form.
    #[must_use]
    pub fn from_config(login: &LoginConfig) -> Self {
        Self::new(login.username.clone(), login.password.clone())
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        // Evaluate both comparisons so timing does not reveal which one failed.
        let username_ok = self.username.as_bytes().ct_eq(username.as_bytes());
        let password_ok = self
            .password
            .expose_secret()
            .as_bytes()
            .ct_eq(password.as_bytes());
        (username_ok & password_ok).into()
    }
}

/// Verify a login attempt.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` if the pair is rejected.
pub fn authenticate(
    verifier: &dyn CredentialVerifier,
    username: &str,
    password: &str,
) -> Result<(), AuthError> {
    if verifier.verify(username, password) {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}
