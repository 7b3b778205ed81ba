//! Redacted product projection shared by every catalog format.
//!
//! The price of a product is only visible to visitors with a session. That
//! rule is applied once, here, before any format-specific rendering, so the
//! HTML table, the spreadsheet download and the JSON download cannot drift
//! apart.

use serde::Serialize;

use crate::{Price, Product, ProductId};

/// A product as it may be shown to the current visitor.
///
/// Field names on the wire follow the catalog's published JSON format
/// (`id`, `nombre`, `tipo`, `precio`). `precio` is omitted entirely when the
/// price is redacted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "precio", skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
}

impl ProductView {
    /// Whether this view carries a price.
    #[must_use]
    pub const fn shows_price(&self) -> bool {
        self.price.is_some()
    }
}

/// Project a product for a visitor, hiding the price unless a session is
/// present.
#[must_use]
pub fn redact(product: &Product, session_present: bool) -> ProductView {
    ProductView {
        id: product.id,
        name: product.name.clone(),
        kind: product.kind.clone(),
        price: session_present.then_some(product.price),
    }
}

/// [`redact`] every product, preserving order.
#[must_use]
pub fn redact_all(products: &[Product], session_present: bool) -> Vec<ProductView> {
    products
        .iter()
        .map(|product| redact(product, session_present))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(ProductId::new(1), "Notebook", "computacion", Price::from_cents(17_550)),
            Product::new(ProductId::new(2), "Mesa \"escritorio\"", "oficina", Price::from_cents(10_000)),
            Product::new(ProductId::new(3), "Audifonos", "electronica", Price::from_cents(3_999)),
        ]
    }

    #[test]
    fn test_redact_hides_price_without_session() {
        let products = sample();
        let view = redact(&products[0], false);
        assert_eq!(view.price, None);
        assert!(!view.shows_price());
        assert_eq!(view.name, "Notebook");
    }

    #[test]
    fn test_redact_keeps_price_with_session() {
        let products = sample();
        let view = redact(&products[0], true);
        assert_eq!(view.price, Some(Price::from_cents(17_550)));
    }

    #[test]
    fn test_redact_all_preserves_order() {
        let ids: Vec<i32> = redact_all(&sample(), true)
            .iter()
            .map(|view| view.id.as_i32())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_json_entries_match_session_state() {
        for session_present in [true, false] {
            let views = redact_all(&sample(), session_present);
            let json = serde_json::to_value(&views).unwrap_or(Value::Null);
            let entries = json.as_array().cloned().unwrap_or_default();

            assert_eq!(entries.len(), 3);
            for entry in entries {
                assert!(entry.get("id").is_some());
                assert!(entry.get("nombre").is_some());
                assert!(entry.get("tipo").is_some());
                assert_eq!(entry.get("precio").is_some(), session_present);
            }
        }
    }

    #[test]
    fn test_json_escapes_string_fields() {
        let views = redact_all(&sample(), false);
        let json = serde_json::to_string(&views).unwrap_or_default();
        assert!(json.contains(r#""nombre":"Mesa \"escritorio\"""#));
    }
}
