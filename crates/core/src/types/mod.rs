//! Core types for the catalog.
//!
//! This module provides type-safe wrappers for the catalog's domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod view;

pub use id::*;
pub use price::Price;
pub use product::Product;
pub use view::{ProductView, redact, redact_all};
