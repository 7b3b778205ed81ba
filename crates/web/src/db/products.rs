//! Product repository.

use manejo_cookies_core::{Price, Product, ProductId};

/// Source of the catalog's products.
///
/// `list` is synchronous and infallible; the product list is owned and
/// populated outside the web layer.
pub trait ProductRepository: Send + Sync {
    /// All products, in display order.
    fn list(&self) -> Vec<Product>;
}

/// In-memory product list fixed at construction time.
#[derive(Debug, Clone)]
pub struct StaticProductRepository {
    products: Vec<Product>,
}

impl StaticProductRepository {
    /// Create a repository serving exactly `products`, in the given order.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The stock catalog shipped with the application.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(ProductId::new(1), "notebook", "computacion", Price::from_cents(17_500_000)),
            Product::new(ProductId::new(2), "mesa escritorio", "oficina", Price::from_cents(10_000_000)),
            Product::new(ProductId::new(3), "teclado mecanico", "computacion", Price::from_cents(4_000_000)),
        ])
    }
}

impl Default for StaticProductRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ProductRepository for StaticProductRepository {
    fn list(&self) -> Vec<Product> {
        self.products.clone()
    }
}
