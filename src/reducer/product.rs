use std::sync::Arc;

use super::Reducer;
use crate::actions::{AppAction, ProductAction};
use crate::domain::{Product, NEW_PRODUCT_ID};
use crate::error::ReduceError;
use crate::state::ProductState;

pub struct ProductReducer;

impl Reducer for ProductReducer {
    type State = ProductState;
    type Action = AppAction;

    fn reduce(state: &ProductState, action: &AppAction) -> Result<ProductState, ReduceError> {
        let AppAction::Product(action) = action else {
            return Ok(state.clone());
        };

        let next = match action {
            ProductAction::LoadProducts => ProductState {
                error: None,
                ..state.clone()
            },
            ProductAction::LoadProductsSuccess { products } => ProductState {
                products: Arc::new(products.clone()),
                error: None,
                ..state.clone()
            },

            ProductAction::SetCurrentProduct { current_product_id } => ProductState {
                current_product_id: Some(*current_product_id),
                error: None,
                ..state.clone()
            },
            ProductAction::InitCurrentProduct => ProductState {
                current_product_id: Some(NEW_PRODUCT_ID),
                error: None,
                ..state.clone()
            },
            ProductAction::ClearCurrentProduct => ProductState {
                current_product_id: None,
                error: None,
                ..state.clone()
            },
            ProductAction::ToggleProductCode => ProductState {
                show_product_code: !state.show_product_code,
                ..state.clone()
            },

            ProductAction::CreateProductSuccess { product } => {
                if product.is_new() {
                    return Err(ReduceError::UnassignedProductId);
                }
                if state.contains(product.id) {
                    return Err(ReduceError::DuplicateProductId(product.id));
                }
                let mut products = Vec::with_capacity(state.products.len() + 1);
                products.extend(state.products.iter().cloned());
                products.push(product.clone());
                ProductState {
                    products: Arc::new(products),
                    current_product_id: Some(product.id),
                    error: None,
                    ..state.clone()
                }
            }
            ProductAction::UpdateProductSuccess { product } => ProductState {
                products: replace_product(&state.products, product),
                current_product_id: Some(product.id),
                error: None,
                ..state.clone()
            },
            ProductAction::DeleteProductSuccess { product_id } => {
                let products = if state.contains(*product_id) {
                    Arc::new(
                        state
                            .products
                            .iter()
                            .filter(|p| p.id != *product_id)
                            .cloned()
                            .collect(),
                    )
                } else {
                    Arc::clone(&state.products)
                };
                let current_product_id = match state.current_product_id {
                    Some(id) if id == *product_id => None,
                    other => other,
                };
                ProductState {
                    products,
                    current_product_id,
                    error: None,
                    ..state.clone()
                }
            }

            ProductAction::LoadProductsFailure { error }
            | ProductAction::CreateProductFailure { error }
            | ProductAction::UpdateProductFailure { error }
            | ProductAction::DeleteProductFailure { error } => ProductState {
                error: Some(error.clone()),
                ..state.clone()
            },

            // Requests only matter to the effect coordinator.
            ProductAction::CreateProduct { .. }
            | ProductAction::UpdateProduct { .. }
            | ProductAction::DeleteProduct { .. } => state.clone(),
        };

        Ok(next)
    }
}

/// Swaps in `product` for the entry with the same id. With no such entry the
/// original list is returned untouched.
fn replace_product(products: &Arc<Vec<Product>>, product: &Product) -> Arc<Vec<Product>> {
    if !products.iter().any(|p| p.id == product.id) {
        return Arc::clone(products);
    }
    Arc::new(
        products
            .iter()
            .map(|p| if p.id == product.id { product.clone() } else { p.clone() })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::UserAction;

    fn leaf_rake() -> Product {
        Product::new(1, "Leaf Rake", "GDN-0011", "Leaf rake with 48-inch wooden handle.", 3)
    }

    fn garden_cart() -> Product {
        Product::new(2, "Garden Cart", "GDN-0023", "15 gallon capacity rolling garden cart", 4)
    }

    fn hammer() -> Product {
        Product::new(7, "Hammer", "TBX-0048", "Curved claw steel hammer", 5)
    }

    fn loaded() -> ProductState {
        ProductState::with_products(vec![leaf_rake(), garden_cart(), hammer()])
    }

    fn reduce(state: &ProductState, action: ProductAction) -> ProductState {
        ProductReducer::reduce(state, &action.into()).unwrap()
    }

    #[test]
    fn unrelated_action_returns_state_unchanged() {
        let state = ProductState {
            current_product_id: Some(7),
            error: Some("boom".into()),
            ..loaded()
        };
        let next = ProductReducer::reduce(&state, &UserAction::ToggleUserMask.into()).unwrap();
        assert_eq!(next, state);
        assert!(Arc::ptr_eq(&next.products, &state.products));
    }

    #[test]
    fn load_products_clears_error_only() {
        let state = ProductState { error: Some("boom".into()), ..loaded() };
        let next = reduce(&state, ProductAction::LoadProducts);
        assert_eq!(next.error, None);
        assert!(Arc::ptr_eq(&next.products, &state.products));
    }

    #[test]
    fn load_products_success_replaces_list_and_clears_error() {
        let state = ProductState { error: Some("boom".into()), ..loaded() };
        let next = reduce(&state, ProductAction::LoadProductsSuccess { products: vec![] });
        assert!(next.products.is_empty());
        assert_eq!(next.error, None);
    }

    #[test]
    fn failures_record_message_and_keep_data() {
        let state = ProductState { current_product_id: Some(2), ..loaded() };
        for action in [
            ProductAction::LoadProductsFailure { error: "load".into() },
            ProductAction::CreateProductFailure { error: "create".into() },
            ProductAction::UpdateProductFailure { error: "update".into() },
            ProductAction::DeleteProductFailure { error: "delete".into() },
        ] {
            let next = reduce(&state, action);
            assert!(next.error.is_some());
            assert_eq!(next.current_product_id, Some(2));
            assert!(Arc::ptr_eq(&next.products, &state.products));
        }
    }

    #[test]
    fn selection_transitions() {
        let state = ProductState { error: Some("boom".into()), ..loaded() };

        let next = reduce(&state, ProductAction::SetCurrentProduct { current_product_id: 7 });
        assert_eq!(next.current_product_id, Some(7));
        assert_eq!(next.error, None);

        let next = reduce(&next, ProductAction::InitCurrentProduct);
        assert_eq!(next.current_product_id, Some(0));

        let next = reduce(&next, ProductAction::ClearCurrentProduct);
        assert_eq!(next.current_product_id, None);
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let state = loaded();
        let once = reduce(&state, ProductAction::ToggleProductCode);
        assert!(once.show_product_code);
        let twice = reduce(&once, ProductAction::ToggleProductCode);
        assert_eq!(twice, state);
    }

    #[test]
    fn request_actions_do_not_change_state() {
        let state = ProductState { error: Some("boom".into()), ..loaded() };
        for action in [
            ProductAction::CreateProduct { product: Product::new_template() },
            ProductAction::UpdateProduct { product: hammer() },
            ProductAction::DeleteProduct { product_id: 7 },
        ] {
            assert_eq!(reduce(&state, action), state);
        }
    }

    #[test]
    fn create_success_appends_and_selects() {
        let state = ProductState { current_product_id: Some(0), ..loaded() };
        let widget = Product::new(5, "Widget", "WDG-0005", "", 2);
        let next = reduce(&state, ProductAction::CreateProductSuccess { product: widget.clone() });
        assert_eq!(next.products.len(), 4);
        assert_eq!(next.products.last(), Some(&widget));
        assert_eq!(next.current_product_id, Some(5));
    }

    #[test]
    fn create_success_with_existing_id_is_rejected() {
        let state = loaded();
        let clash = Product::new(2, "Clash", "X", "", 1);
        let result = ProductReducer::reduce(&state, &ProductAction::CreateProductSuccess { product: clash }.into());
        assert_eq!(result, Err(ReduceError::DuplicateProductId(2)));
    }

    #[test]
    fn create_success_without_assigned_id_is_rejected() {
        let result = ProductReducer::reduce(
            &loaded(),
            &ProductAction::CreateProductSuccess { product: Product::new_template() }.into(),
        );
        assert_eq!(result, Err(ReduceError::UnassignedProductId));
    }

    #[test]
    fn update_success_replaces_in_place_and_selects() {
        let state = loaded();
        let renamed = Product { product_name: "Rake".into(), ..leaf_rake() };
        let next = reduce(&state, ProductAction::UpdateProductSuccess { product: renamed.clone() });
        assert_eq!(next.products[0], renamed);
        assert_eq!(next.products.len(), 3);
        assert_eq!(next.current_product_id, Some(1));
    }

    #[test]
    fn update_success_for_unknown_id_leaves_list() {
        let state = loaded();
        let ghost = Product::new(42, "Ghost", "GH-1", "", 1);
        let next = reduce(&state, ProductAction::UpdateProductSuccess { product: ghost });
        assert!(Arc::ptr_eq(&next.products, &state.products));
        assert_eq!(next.current_product_id, Some(42));
    }

    #[test]
    fn delete_success_removes_and_deselects() {
        let state = ProductState { current_product_id: Some(7), ..loaded() };
        let next = reduce(&state, ProductAction::DeleteProductSuccess { product_id: 7 });
        assert_eq!(next.current_product_id, None);
        assert!(!next.contains(7));
        assert_eq!(next.products.len(), 2);
    }

    #[test]
    fn delete_success_keeps_other_selection() {
        let state = ProductState { current_product_id: Some(1), ..loaded() };
        let next = reduce(&state, ProductAction::DeleteProductSuccess { product_id: 7 });
        assert_eq!(next.current_product_id, Some(1));
    }
}
