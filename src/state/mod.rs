//! The state tree. Only the reducers in [`crate::reducer`] produce new values.

mod product;
mod user;

pub use product::ProductState;
pub use user::UserState;

/// Root of the state tree: one slice per feature.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub products: ProductState,
    pub user: UserState,
}

/// Picks the product slice out of the application state.
pub fn product_feature(state: &AppState) -> &ProductState {
    &state.products
}

/// Picks the user slice out of the application state.
pub fn user_feature(state: &AppState) -> &UserState {
    &state.user
}
