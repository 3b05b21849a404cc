use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::actions::AppAction;
use crate::error::StoreError;

/// Messages accepted by the store loop.
#[derive(Debug)]
pub enum StoreMessage {
    Action(AppAction),
    Shutdown,
}

/// Cloneable sending half of the dispatch queue.
///
/// Every producer (views, effect tasks) shares the one queue, so the store
/// reduces actions in the exact order they were enqueued.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    sender: mpsc::UnboundedSender<StoreMessage>,
}

impl Dispatcher {
    pub(crate) fn new(sender: mpsc::UnboundedSender<StoreMessage>) -> Self {
        Self { sender }
    }

    /// Enqueue an action. Never blocks; the outcome shows up as state changes.
    pub fn dispatch(&self, action: impl Into<AppAction>) {
        if let Err(e) = self.try_dispatch(action) {
            warn!(error = %e, "Dropping action");
        }
    }

    pub fn try_dispatch(&self, action: impl Into<AppAction>) -> Result<(), StoreError> {
        let action = action.into();
        debug!(action = action.type_tag(), "Enqueue");
        self.sender
            .send(StoreMessage::Action(action))
            .map_err(|_| StoreError::Closed)
    }

    pub(crate) fn shutdown(&self) -> Result<(), StoreError> {
        self.sender.send(StoreMessage::Shutdown).map_err(|_| StoreError::Closed)
    }
}
