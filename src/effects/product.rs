use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::Effects;
use crate::actions::{AppAction, ProductAction};
use crate::domain::{Product, ProductId, NEW_PRODUCT_ID};
use crate::store::Dispatcher;
use crate::transport::ProductTransport;

/// Runs the product requests against a [`ProductTransport`].
///
/// Every request gets its own task; nothing is cancelled or coalesced, so two
/// requests for the same product apply in completion order.
pub struct ProductEffects {
    transport: Arc<dyn ProductTransport>,
    dispatcher: Dispatcher,
}

impl ProductEffects {
    pub fn new(transport: Arc<dyn ProductTransport>, dispatcher: Dispatcher) -> Self {
        Self { transport, dispatcher }
    }
}

impl Effects for ProductEffects {
    fn handle(&self, action: &AppAction) {
        let AppAction::Product(action) = action else {
            return;
        };
        let transport = Arc::clone(&self.transport);
        let dispatcher = self.dispatcher.clone();

        match action {
            ProductAction::LoadProducts => {
                tokio::spawn(load_products(transport, dispatcher));
            }
            ProductAction::CreateProduct { product } => {
                tokio::spawn(create_product(transport, dispatcher, product.clone()));
            }
            ProductAction::UpdateProduct { product } => {
                tokio::spawn(update_product(transport, dispatcher, product.clone()));
            }
            ProductAction::DeleteProduct { product_id } => {
                tokio::spawn(delete_product(transport, dispatcher, *product_id));
            }
            _ => {}
        }
    }
}

#[instrument(skip_all)]
async fn load_products(transport: Arc<dyn ProductTransport>, dispatcher: Dispatcher) {
    let outcome = match transport.list_products().await {
        Ok(products) => {
            info!(count = products.len(), "Products loaded");
            ProductAction::LoadProductsSuccess { products }
        }
        Err(e) => {
            warn!(error = %e, "Loading products failed");
            ProductAction::LoadProductsFailure { error: e.to_string() }
        }
    };
    dispatcher.dispatch(outcome);
}

#[instrument(skip_all, fields(product_name = %product.product_name))]
async fn create_product(transport: Arc<dyn ProductTransport>, dispatcher: Dispatcher, product: Product) {
    let outgoing = Product { id: NEW_PRODUCT_ID, ..product };
    let outcome = match transport.create_product(outgoing).await {
        Ok(created) => {
            info!(product_id = created.id, "Product created");
            ProductAction::CreateProductSuccess { product: created }
        }
        Err(e) => {
            warn!(error = %e, "Creating product failed");
            ProductAction::CreateProductFailure { error: e.to_string() }
        }
    };
    dispatcher.dispatch(outcome);
}

#[instrument(skip_all, fields(product_id = product.id))]
async fn update_product(transport: Arc<dyn ProductTransport>, dispatcher: Dispatcher, product: Product) {
    // The echo from the backend is ignored; the store keeps what was submitted.
    let outcome = match transport.update_product(product.clone()).await {
        Ok(_) => {
            info!("Product updated");
            ProductAction::UpdateProductSuccess { product }
        }
        Err(e) => {
            warn!(error = %e, "Updating product failed");
            ProductAction::UpdateProductFailure { error: e.to_string() }
        }
    };
    dispatcher.dispatch(outcome);
}

#[instrument(skip(transport, dispatcher))]
async fn delete_product(transport: Arc<dyn ProductTransport>, dispatcher: Dispatcher, product_id: ProductId) {
    let outcome = match transport.delete_product(product_id).await {
        Ok(()) => {
            info!("Product deleted");
            ProductAction::DeleteProductSuccess { product_id }
        }
        Err(e) => {
            warn!(error = %e, "Deleting product failed");
            ProductAction::DeleteProductFailure { error: e.to_string() }
        }
    };
    dispatcher.dispatch(outcome);
}
