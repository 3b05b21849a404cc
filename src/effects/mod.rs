//! Effect coordinators: turn request actions into backend calls and the
//! outcomes back into actions.

mod product;

pub use product::ProductEffects;

use crate::actions::AppAction;

/// Reacts to actions after the store has reduced them.
///
/// Implementations must not block: any I/O runs on a spawned task which
/// reports back by dispatching exactly one outcome action per request.
pub trait Effects: Send + 'static {
    fn handle(&self, action: &AppAction);
}
