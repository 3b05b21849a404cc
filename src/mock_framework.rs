//! # Mock Framework
//!
//! Utilities for testing effects and the store without a backend.
//!
//! Use [`create_mock_transport`] to get a transport and a receiver of the
//! requests it makes. Then use helpers like [`expect_create`] to assert each
//! request and answer it through its responder.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::actions::AppAction;
use crate::domain::{Product, ProductId};
use crate::error::TransportError;
use crate::store::{Dispatcher, StoreMessage};
use crate::transport::ProductTransport;

pub type Responder<T> = oneshot::Sender<Result<T, TransportError>>;

#[derive(Debug)]
pub enum TransportRequest {
    List { respond_to: Responder<Vec<Product>> },
    Create { product: Product, respond_to: Responder<Product> },
    Update { product: Product, respond_to: Responder<Product> },
    Delete { id: ProductId, respond_to: Responder<()> },
}

/// Transport whose every call waits for the test to answer it.
pub struct MockTransport {
    sender: mpsc::Sender<TransportRequest>,
}

impl MockTransport {
    async fn call<T>(&self, request: impl FnOnce(Responder<T>) -> TransportRequest) -> Result<T, TransportError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| TransportError::client("mock transport closed"))?;
        response
            .await
            .map_err(|_| TransportError::client("mock responder dropped"))?
    }
}

#[async_trait]
impl ProductTransport for MockTransport {
    async fn list_products(&self) -> Result<Vec<Product>, TransportError> {
        self.call(|respond_to| TransportRequest::List { respond_to }).await
    }

    async fn create_product(&self, product: Product) -> Result<Product, TransportError> {
        self.call(|respond_to| TransportRequest::Create { product, respond_to }).await
    }

    async fn update_product(&self, product: Product) -> Result<Product, TransportError> {
        self.call(|respond_to| TransportRequest::Update { product, respond_to }).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), TransportError> {
        self.call(|respond_to| TransportRequest::Delete { id, respond_to }).await
    }
}

/// Creates a mock transport and a receiver for asserting requests.
///
/// # Testing Strategy
/// Rather than running the in-memory backend, the test plays the backend:
/// it receives each request, checks it, and decides the reply. Success,
/// failure and reply order are all under the test's control.
pub fn create_mock_transport(buffer_size: usize) -> (Arc<MockTransport>, mpsc::Receiver<TransportRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (Arc::new(MockTransport { sender }), receiver)
}

/// A dispatcher whose queue the test reads instead of a store.
pub fn create_mock_dispatcher() -> (Dispatcher, mpsc::UnboundedReceiver<StoreMessage>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (Dispatcher::new(sender), receiver)
}

/// Helper to verify that the next dispatched message is an action
pub async fn expect_dispatched(receiver: &mut mpsc::UnboundedReceiver<StoreMessage>) -> Option<AppAction> {
    match receiver.recv().await {
        Some(StoreMessage::Action(action)) => Some(action),
        _ => None,
    }
}

/// Helper to verify that the next request is a List
pub async fn expect_list(receiver: &mut mpsc::Receiver<TransportRequest>) -> Option<Responder<Vec<Product>>> {
    match receiver.recv().await {
        Some(TransportRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next request is a Create
pub async fn expect_create(receiver: &mut mpsc::Receiver<TransportRequest>) -> Option<(Product, Responder<Product>)> {
    match receiver.recv().await {
        Some(TransportRequest::Create { product, respond_to }) => Some((product, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is an Update
pub async fn expect_update(receiver: &mut mpsc::Receiver<TransportRequest>) -> Option<(Product, Responder<Product>)> {
    match receiver.recv().await {
        Some(TransportRequest::Update { product, respond_to }) => Some((product, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is a Delete
pub async fn expect_delete(receiver: &mut mpsc::Receiver<TransportRequest>) -> Option<(ProductId, Responder<()>)> {
    match receiver.recv().await {
        Some(TransportRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport() {
        let (transport, mut requests) = create_mock_transport(4);

        let call = tokio::spawn({
            let transport = Arc::clone(&transport);
            async move { transport.delete_product(3).await }
        });

        let (id, responder) = expect_delete(&mut requests).await.expect("Expected Delete request");
        assert_eq!(id, 3);
        responder.send(Err(TransportError::not_found(3))).unwrap();

        let result = call.await.unwrap();
        assert_eq!(result, Err(TransportError::not_found(3)));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_client_error() {
        let (transport, mut requests) = create_mock_transport(4);
        let call = tokio::spawn(async move { transport.list_products().await });

        drop(expect_list(&mut requests).await.expect("Expected List request"));
        let result = call.await.unwrap();
        assert!(matches!(result, Err(TransportError::Client { .. })));
    }
}
