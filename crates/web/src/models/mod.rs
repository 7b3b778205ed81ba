//! Domain models for the web layer.

pub mod session;

pub use session::{SESSION_COOKIE_NAME, SessionUser};
