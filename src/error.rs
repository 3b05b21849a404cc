use thiserror::Error;

use crate::domain::ProductId;

/// Why a call to the product backend failed.
///
/// The rendered message is what ends up in the `error` slice of the state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request never got an answer (connection refused, channel closed, ...).
    #[error("An error occurred: {message}")]
    Client { message: String },
    /// The backend answered with a failure status.
    #[error("Backend returned code {status}: {body}")]
    Server { status: u16, body: String },
}

impl TransportError {
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client { message: message.into() }
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::Server {
            status: 404,
            body: format!("Product not found: {}", id),
        }
    }
}

/// Internal consistency faults detected while reducing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReduceError {
    #[error("Created product id {0} already exists in the product list")]
    DuplicateProductId(ProductId),
    #[error("Created product came back without a backend-assigned id")]
    UnassignedProductId,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store is closed")]
    Closed,
    #[error("Transition rejected: {0}")]
    Reduce(#[from] ReduceError),
    #[error("Task failed: {0}")]
    TaskFailed(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
