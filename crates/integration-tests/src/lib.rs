//! Integration tests for the cookie-gated catalog.
//!
//! The tests drive a running server over HTTP, letting `reqwest`'s cookie
//! store play the part of the browser.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server
//! cargo run -p manejo-cookies-web
//!
//! # Run integration tests against it
//! cargo test -p manejo-cookies-integration-tests -- --ignored
//! ```
//!
//! Set `CATALOG_BASE_URL` to target a server somewhere other than
//! `http://localhost:8080`.

use reqwest::Client;

/// Base URL of the server under test (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("CATALOG_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Build a client that keeps cookies between requests, like a browser.
///
/// Redirects are not followed so tests can assert on them.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn browser() -> reqwest::Result<Client> {
    Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
}
