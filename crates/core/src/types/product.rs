//! Catalog product record.

use serde::{Deserialize, Serialize};

use crate::{Price, ProductId};

/// A product as supplied by the product repository.
///
/// Products are immutable once loaded; the catalog never creates, updates or
/// deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Category label, e.g. "computacion".
    pub kind: String,
    pub price: Price,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, kind: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
            price,
        }
    }
}
