use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument};

use super::core::Store;
use super::dispatcher::{Dispatcher, StoreMessage};
use super::selection::Selection;
use crate::actions::AppAction;
use crate::effects::Effects;
use crate::error::StoreError;
use crate::state::AppState;

/// Owns the [`Store`] and drains the dispatch queue one action at a time.
///
/// After an action is reduced it is offered to every registered effect, which
/// may start I/O and later enqueue outcome actions on the same queue.
pub struct StoreActor {
    receiver: mpsc::UnboundedReceiver<StoreMessage>,
    store: Store,
    effects: Vec<Box<dyn Effects>>,
}

impl StoreActor {
    pub fn new(initial: AppState) -> (Self, StoreHandle) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let store = Store::new(initial);
        let handle = StoreHandle {
            dispatcher: Dispatcher::new(sender),
            states: store.subscribe(),
        };
        let actor = Self {
            receiver,
            store,
            effects: Vec::new(),
        };
        (actor, handle)
    }

    pub fn with_effects(mut self, effects: impl Effects) -> Self {
        self.effects.push(Box::new(effects));
        self
    }

    #[instrument(name = "store", skip(self))]
    pub async fn run(mut self) {
        info!("Store starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreMessage::Action(action) => self.handle_action(action),
                StoreMessage::Shutdown => {
                    info!("Store shutting down");
                    break;
                }
            }
        }
        info!(faults = self.store.faults().len(), "Store stopped");
    }

    fn handle_action(&mut self, action: AppAction) {
        // Rejections are logged and recorded by the store itself.
        let _ = self.store.dispatch(&action);
        for effects in &self.effects {
            effects.handle(&action);
        }
    }
}

/// Cheap, cloneable access to a running store: dispatch in, selections out.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    dispatcher: Dispatcher,
    states: watch::Receiver<Arc<AppState>>,
}

impl StoreHandle {
    pub fn dispatch(&self, action: impl Into<AppAction>) {
        self.dispatcher.dispatch(action);
    }

    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    /// Subscribe to a selector. See [`Selection`].
    pub fn select<T, F>(&self, selector: F) -> Selection<T, F>
    where
        T: Clone + PartialEq,
        F: FnMut(&AppState) -> T,
    {
        Selection::new(self.states.clone(), selector)
    }

    /// Latest published state.
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.states.borrow())
    }

    /// Ask the loop to stop after the actions already queued.
    pub fn shutdown(&self) -> Result<(), StoreError> {
        debug!("Requesting store shutdown");
        self.dispatcher.shutdown()
    }
}
