use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use super::ProductTransport;
use crate::actor_framework::{Entity, FrameworkError, ResourceActor, ResourceClient};
use crate::domain::{Product, ProductId, NEW_PRODUCT_ID};
use crate::error::TransportError;

/// What the backend needs to create a product: everything but the id.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub product_name: String,
    pub product_code: String,
    pub description: String,
    pub star_rating: i32,
}

impl From<Product> for ProductCreate {
    fn from(product: Product) -> Self {
        Self {
            product_name: product.product_name,
            product_code: product.product_code,
            description: product.description,
            star_rating: product.star_rating,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;
    type CreatePayload = ProductCreate;
    /// Updates replace the whole product.
    type Patch = Product;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_create(id: ProductId, payload: ProductCreate) -> Result<Self, FrameworkError> {
        Ok(Self {
            id,
            product_name: payload.product_name,
            product_code: payload.product_code,
            description: payload.description,
            star_rating: payload.star_rating,
        })
    }

    fn on_update(&mut self, patch: Product) -> Result<(), FrameworkError> {
        if patch.id != self.id {
            return Err(FrameworkError::Validation(format!(
                "Product id {} does not match resource {}",
                patch.id, self.id
            )));
        }
        *self = patch;
        Ok(())
    }
}

impl From<FrameworkError> for TransportError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => TransportError::Server {
                status: 404,
                body: format!("Product not found: {}", id),
            },
            FrameworkError::Validation(msg) => TransportError::Server { status: 400, body: msg },
            other => TransportError::client(other.to_string()),
        }
    }
}

/// Product API served by a [`ResourceActor`] living in its own task.
///
/// Stands in for the remote web API: ids are handed out sequentially after
/// the highest seeded id, and every call can be delayed to mimic a network.
#[derive(Clone)]
pub struct InMemoryBackend {
    client: ResourceClient<Product>,
    latency: Duration,
}

impl InMemoryBackend {
    pub fn spawn(buffer_size: usize, seed: Vec<Product>, latency: Duration) -> (Self, JoinHandle<()>) {
        let mut last_id = seed.iter().map(|p| p.id).max().unwrap_or(NEW_PRODUCT_ID);
        let next_product_id = move || -> Result<ProductId, FrameworkError> {
            last_id = last_id
                .checked_add(1)
                .ok_or_else(|| FrameworkError::Validation("Product id space exhausted".to_string()))?;
            Ok(last_id)
        };

        let (actor, client) = ResourceActor::new(buffer_size, seed, next_product_id);
        let handle = tokio::spawn(actor.run());
        (Self { client, latency }, handle)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl ProductTransport for InMemoryBackend {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, TransportError> {
        debug!("Sending request");
        self.simulate_latency().await;
        Ok(self.client.list().await?)
    }

    #[instrument(skip(self, product), fields(product_name = %product.product_name))]
    async fn create_product(&self, product: Product) -> Result<Product, TransportError> {
        debug!("Sending request");
        self.simulate_latency().await;
        Ok(self.client.create(product.into()).await?)
    }

    #[instrument(skip(self, product), fields(product_id = product.id))]
    async fn update_product(&self, product: Product) -> Result<Product, TransportError> {
        debug!("Sending request");
        self.simulate_latency().await;
        Ok(self.client.update(product.id, product).await?)
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: ProductId) -> Result<(), TransportError> {
        debug!("Sending request");
        self.simulate_latency().await;
        Ok(self.client.delete(id).await?)
    }
}
