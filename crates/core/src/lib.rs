//! manejo-cookies core - Domain types library.
//!
//! This crate holds the catalog's domain types and the price redaction rule
//! shared by every output format of the web crate.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no templates. Rendering lives in `manejo-cookies-web`.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, products and their redacted views

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
