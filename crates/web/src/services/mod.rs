//! Business logic services.
//!
//! # Services
//!
//! - `auth` - Verification of the login form's credentials

pub mod auth;
