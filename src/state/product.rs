use std::sync::Arc;

use crate::domain::{Product, ProductId};

/// The product feature slice.
///
/// `products` sits behind an `Arc` so a transition that leaves the list alone
/// hands the very same allocation to the next state. Selectors use that to
/// skip recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductState {
    /// Load order, ids unique.
    pub products: Arc<Vec<Product>>,
    /// `None`: nothing selected. `Some(0)`: the new-product template.
    /// Any other id is expected to be present in `products`.
    pub current_product_id: Option<ProductId>,
    pub show_product_code: bool,
    /// Message of the most recent failed operation.
    pub error: Option<String>,
}

impl ProductState {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
            ..Self::default()
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.iter().any(|p| p.id == id)
    }
}
