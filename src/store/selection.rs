use std::sync::Arc;

use tokio::sync::watch;

use crate::state::AppState;

/// A live subscription to one selector.
///
/// The first [`next`](Self::next) yields the current value right away. Later
/// calls wait for a state change that alters the selected value; changes that
/// leave it equal are skipped. Only the latest state is observed, so a slow
/// subscriber sees the newest value rather than every intermediate one.
pub struct Selection<T, F> {
    receiver: watch::Receiver<Arc<AppState>>,
    selector: F,
    last: Option<T>,
}

impl<T, F> Selection<T, F>
where
    T: Clone + PartialEq,
    F: FnMut(&AppState) -> T,
{
    pub(crate) fn new(receiver: watch::Receiver<Arc<AppState>>, selector: F) -> Self {
        Self { receiver, selector, last: None }
    }

    /// Next distinct value, or `None` once the store has shut down.
    pub async fn next(&mut self) -> Option<T> {
        if self.last.is_none() {
            let state = Arc::clone(&self.receiver.borrow_and_update());
            let value = (self.selector)(&state);
            return Some(self.remember(value));
        }

        loop {
            self.receiver.changed().await.ok()?;
            let state = Arc::clone(&self.receiver.borrow_and_update());
            let value = (self.selector)(&state);
            if self.last.as_ref() != Some(&value) {
                return Some(self.remember(value));
            }
        }
    }

    /// The selector applied to the current state, without waiting.
    pub fn current(&mut self) -> T {
        let state = Arc::clone(&self.receiver.borrow());
        (self.selector)(&state)
    }

    fn remember(&mut self, value: T) -> T {
        self.last = Some(value.clone());
        value
    }
}
