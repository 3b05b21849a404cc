//! Reducers: the only place where state transitions happen.
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Selectors ──→ View
//!    ↑                                            │
//!    └────────────────────────────────────────────┘
//! ```

mod product;
mod user;

pub use product::ProductReducer;
pub use user::UserReducer;

use crate::actions::AppAction;
use crate::error::ReduceError;
use crate::state::AppState;

/// Reducer transforms state based on actions.
///
/// Must be a pure function of `(state, action)`: no I/O, no clocks, no
/// randomness. Fields a transition does not touch are carried over as-is so
/// that `Arc`-held data stays pointer-equal across states.
pub trait Reducer {
    type State: Clone + PartialEq;
    type Action;

    /// Process an action and return the new state.
    ///
    /// Actions the reducer does not handle must come back as an unchanged copy
    /// of `state`. An `Err` means the transition would break an invariant and
    /// must not be applied.
    fn reduce(state: &Self::State, action: &Self::Action) -> Result<Self::State, ReduceError>;
}

/// Root reducer: hands every action to every slice reducer.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(state: &AppState, action: &AppAction) -> Result<AppState, ReduceError> {
        Ok(AppState {
            products: ProductReducer::reduce(&state.products, action)?,
            user: UserReducer::reduce(&state.user, action)?,
        })
    }
}
