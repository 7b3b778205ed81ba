//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (one `http_request` span per request)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, nosniff, etc.)
//!
//! The session is not a layer: handlers take the [`OptionalSession`]
//! extractor, which reads the `username` cookie.

pub mod auth;
pub mod request_id;
pub mod security_headers;

pub use auth::{OptionalSession, clear_session_cookie, resolve_session, set_session_cookie};
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use security_headers::security_headers_middleware;
