//! Derived, read-only views of the state tree.
//!
//! Slice selectors take the slice they read; compose them with
//! [`crate::state::product_feature`] / [`crate::state::user_feature`] to select
//! from the whole [`crate::state::AppState`].

mod memo;
mod product;
mod user;

pub use memo::{ByRef, Memo};
pub use product::*;
pub use user::*;
