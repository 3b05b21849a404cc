use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::config::StoreConfig;
use crate::effects::ProductEffects;
use crate::error::StoreError;
use crate::state::AppState;
use crate::store::{StoreActor, StoreHandle};
use crate::transport::{InMemoryBackend, ProductTransport};

/// The running product feature: store loop, effects and (optionally) the
/// in-memory backend.
///
/// Responsible for starting the tasks, wiring them together, and shutdown.
pub struct StoreSystem {
    pub store: StoreHandle,
    handles: Vec<JoinHandle<()>>,
}

impl StoreSystem {
    /// Start a store whose product effects talk to `transport`.
    pub fn start(transport: Arc<dyn ProductTransport>) -> Self {
        info!("Starting store system");
        let (actor, store) = StoreActor::new(AppState::default());
        let effects = ProductEffects::new(transport, store.dispatcher());
        let store_handle = tokio::spawn(actor.with_effects(effects).run());

        Self {
            store,
            handles: vec![store_handle],
        }
    }

    /// Start a store backed by an [`InMemoryBackend`] built from `config`.
    pub fn start_in_memory(config: &StoreConfig) -> Self {
        let (backend, backend_handle) = InMemoryBackend::spawn(
            config.backend.buffer_size,
            config.backend.seed.clone(),
            config.backend.latency(),
        );
        let mut system = Self::start(Arc::new(backend));
        system.handles.push(backend_handle);
        system
    }

    /// Stop the store after the actions already queued, then wait for every
    /// task. The backend stops once the last effect holding it is gone.
    pub async fn shutdown(self) -> Result<(), StoreError> {
        info!("Shutting down store system...");
        self.store.shutdown()?;

        let mut first_failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Task failed: {:?}", e);
                first_failure.get_or_insert(StoreError::TaskFailed(e.to_string()));
            }
        }

        match first_failure {
            Some(e) => Err(e),
            None => {
                info!("Store system shutdown complete.");
                Ok(())
            }
        }
    }
}
