//! The closed action vocabulary. Actions are plain immutable records; the
//! order in which they are dispatched is the order in which they are reduced.

mod product;
mod user;

use serde::{Deserialize, Serialize};

pub use product::ProductAction;
pub use user::UserAction;

/// Any action the store accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppAction {
    Product(ProductAction),
    User(UserAction),
}

impl AppAction {
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Product(action) => action.type_tag(),
            Self::User(action) => action.type_tag(),
        }
    }
}

impl From<ProductAction> for AppAction {
    fn from(action: ProductAction) -> Self {
        Self::Product(action)
    }
}

impl From<UserAction> for AppAction {
    fn from(action: UserAction) -> Self {
        Self::User(action)
    }
}
