use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, instrument};

use super::selection::Selection;
use crate::actions::AppAction;
use crate::error::{ReduceError, StoreError};
use crate::reducer::{AppReducer, Reducer};
use crate::state::AppState;

/// The single authoritative state tree and its only writer.
///
/// Each call to [`dispatch`](Self::dispatch) reduces one action to completion
/// and publishes the result before returning. Rejected transitions leave the
/// state as it was and are kept in [`faults`](Self::faults).
pub struct Store {
    state: Arc<AppState>,
    publisher: watch::Sender<Arc<AppState>>,
    faults: Vec<ReduceError>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        let state = Arc::new(initial);
        let (publisher, _) = watch::channel(Arc::clone(&state));
        Self {
            state,
            publisher,
            faults: Vec::new(),
        }
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.publisher.subscribe()
    }

    pub fn select<T, F>(&self, selector: F) -> Selection<T, F>
    where
        T: Clone + PartialEq,
        F: FnMut(&AppState) -> T,
    {
        Selection::new(self.subscribe(), selector)
    }

    /// Reduce `action` against the current state.
    ///
    /// Returns whether the state changed.
    #[instrument(name = "dispatch", skip_all, fields(action = action.type_tag()))]
    pub fn dispatch(&mut self, action: &AppAction) -> Result<bool, StoreError> {
        let next = match AppReducer::reduce(&self.state, action) {
            Ok(next) => next,
            Err(e) => {
                error!(error = %e, "Rejected transition");
                self.faults.push(e.clone());
                return Err(e.into());
            }
        };

        if next == *self.state {
            debug!("State unchanged");
            return Ok(false);
        }

        self.state = Arc::new(next);
        self.publisher.send_replace(Arc::clone(&self.state));
        debug!("State updated");
        Ok(true)
    }

    pub fn faults(&self) -> &[ReduceError] {
        &self.faults
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
