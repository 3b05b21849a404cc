//! The product backend as the effect coordinator sees it.

mod in_memory;

use async_trait::async_trait;

pub use in_memory::{InMemoryBackend, ProductCreate};

use crate::domain::{Product, ProductId};
use crate::error::TransportError;

/// The four product operations of the backend API.
#[async_trait]
pub trait ProductTransport: Send + Sync + 'static {
    async fn list_products(&self) -> Result<Vec<Product>, TransportError>;

    /// `product.id` is not sent; the backend assigns one and returns the stored product.
    async fn create_product(&self, product: Product) -> Result<Product, TransportError>;

    async fn update_product(&self, product: Product) -> Result<Product, TransportError>;

    async fn delete_product(&self, id: ProductId) -> Result<(), TransportError>;
}
