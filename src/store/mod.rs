//! The store: one state tree, one writer, many readers.
//!
//! [`Store`] is the synchronous core. [`StoreActor`] runs it as a task fed by
//! a single queue so that view gestures and backend outcomes are reduced
//! strictly in arrival order.

mod actor;
mod core;
mod dispatcher;
mod selection;

pub use self::actor::{StoreActor, StoreHandle};
pub use self::core::Store;
pub use self::dispatcher::{Dispatcher, StoreMessage};
pub use self::selection::Selection;
