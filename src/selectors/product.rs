use std::sync::Arc;

use super::memo::{ByRef, Memo};
use crate::domain::{Product, ProductId, NEW_PRODUCT_ID};
use crate::state::{product_feature, AppState, ProductState};

pub fn select_show_product_code(state: &ProductState) -> bool {
    state.show_product_code
}

pub fn select_current_product_id(state: &ProductState) -> Option<ProductId> {
    state.current_product_id
}

/// The list exactly as stored, in load order.
pub fn select_products(state: &ProductState) -> Arc<Vec<Product>> {
    Arc::clone(&state.products)
}

pub fn select_error(state: &ProductState) -> Option<String> {
    state.error.clone()
}

/// Resolves the selection to a product.
///
/// Id `0` yields the new-product template. An id that is not in the list
/// (stale selection) yields `None`, same as no selection at all.
pub fn select_current_product(state: &ProductState) -> Option<Product> {
    resolve_current_product(&state.products, select_current_product_id(state))
}

fn resolve_current_product(products: &[Product], current_product_id: Option<ProductId>) -> Option<Product> {
    match current_product_id {
        None => None,
        Some(NEW_PRODUCT_ID) => Some(Product::new_template()),
        Some(id) => products.iter().find(|p| p.id == id).cloned(),
    }
}

/// Memoized [`select_current_product`] over the whole application state.
///
/// Recomputes only when the product list allocation or the selected id changes.
#[derive(Debug, Default)]
pub struct CurrentProductSelector {
    memo: Memo<(ByRef<Vec<Product>>, Option<ProductId>), Option<Product>>,
}

impl CurrentProductSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, state: &AppState) -> Option<Product> {
        let products = product_feature(state);
        let key = (
            ByRef(Arc::clone(&products.products)),
            select_current_product_id(products),
        );
        self.memo
            .get_or_compute(key, |(list, id)| resolve_current_product(&list.0, *id))
    }

    pub fn recomputations(&self) -> usize {
        self.memo.recomputations()
    }
}
