//! Data access for the catalog.
//!
//! The catalog is read-only and small enough to live in memory. Handlers only
//! see the [`ProductRepository`] trait, so tests can substitute any list.

pub mod products;

pub use products::{ProductRepository, StaticProductRepository};
