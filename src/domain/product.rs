use serde::{Deserialize, Serialize};

/// Identifier of a product. `0` is reserved for a product that was never persisted.
pub type ProductId = u32;

/// Id carried by the "new product" template before the backend assigns a real one.
pub const NEW_PRODUCT_ID: ProductId = 0;

/// A catalog entry as the backend and the views see it.
///
/// Values are never edited in place: every transition that changes a product
/// replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub product_name: String,
    pub product_code: String,
    pub description: String,
    pub star_rating: i32,
}

impl Product {
    pub fn new(
        id: ProductId,
        product_name: impl Into<String>,
        product_code: impl Into<String>,
        description: impl Into<String>,
        star_rating: i32,
    ) -> Self {
        Self {
            id,
            product_name: product_name.into(),
            product_code: product_code.into(),
            description: description.into(),
            star_rating,
        }
    }

    /// The placeholder shown while the user is filling in a brand new product.
    pub fn new_template() -> Self {
        Self::new(NEW_PRODUCT_ID, "", "New", "", 0)
    }

    pub fn is_new(&self) -> bool {
        self.id == NEW_PRODUCT_ID
    }

    /// Copy of this product with the id replaced.
    pub fn with_id(&self, id: ProductId) -> Self {
        Self { id, ..self.clone() }
    }
}
