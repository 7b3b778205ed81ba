//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The submitted username/password pair was rejected.
    #[error("invalid credentials")]
    InvalidCredentials,
}
