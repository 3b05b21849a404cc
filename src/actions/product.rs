use serde::{Deserialize, Serialize};

use crate::domain::{Product, ProductId};

/// Everything that can happen to the product slice.
///
/// Page actions describe what the user asked for. API actions describe how
/// a request to the backend turned out; only the effect coordinator emits those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all_fields = "camelCase")]
pub enum ProductAction {
    #[serde(rename = "[Product Page] Load Products")]
    LoadProducts,
    #[serde(rename = "[Product API] Load Products Success")]
    LoadProductsSuccess { products: Vec<Product> },
    #[serde(rename = "[Product API] Load Products Failure")]
    LoadProductsFailure { error: String },

    #[serde(rename = "[Product Page] Set Current Product")]
    SetCurrentProduct { current_product_id: ProductId },
    /// Selects the unsaved new-product template.
    #[serde(rename = "[Product Page] Init Current Product")]
    InitCurrentProduct,
    #[serde(rename = "[Product Page] Clear Current Product")]
    ClearCurrentProduct,
    #[serde(rename = "[Product Page] Toggle Product Code")]
    ToggleProductCode,

    /// The id of `product` is ignored; the backend assigns one.
    #[serde(rename = "[Product Page] Create Product")]
    CreateProduct { product: Product },
    #[serde(rename = "[Product API] Create Product Success")]
    CreateProductSuccess { product: Product },
    #[serde(rename = "[Product API] Create Product Failure")]
    CreateProductFailure { error: String },

    #[serde(rename = "[Product Page] Update Product")]
    UpdateProduct { product: Product },
    #[serde(rename = "[Product API] Update Product Success")]
    UpdateProductSuccess { product: Product },
    #[serde(rename = "[Product API] Update Product Failure")]
    UpdateProductFailure { error: String },

    #[serde(rename = "[Product Page] Delete Product")]
    DeleteProduct { product_id: ProductId },
    #[serde(rename = "[Product API] Delete Product Success")]
    DeleteProductSuccess { product_id: ProductId },
    #[serde(rename = "[Product API] Delete Product Failure")]
    DeleteProductFailure { error: String },
}

impl ProductAction {
    /// The tag the action is serialized under, e.g. `[Product Page] Load Products`.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::LoadProducts => "[Product Page] Load Products",
            Self::LoadProductsSuccess { .. } => "[Product API] Load Products Success",
            Self::LoadProductsFailure { .. } => "[Product API] Load Products Failure",
            Self::SetCurrentProduct { .. } => "[Product Page] Set Current Product",
            Self::InitCurrentProduct => "[Product Page] Init Current Product",
            Self::ClearCurrentProduct => "[Product Page] Clear Current Product",
            Self::ToggleProductCode => "[Product Page] Toggle Product Code",
            Self::CreateProduct { .. } => "[Product Page] Create Product",
            Self::CreateProductSuccess { .. } => "[Product API] Create Product Success",
            Self::CreateProductFailure { .. } => "[Product API] Create Product Failure",
            Self::UpdateProduct { .. } => "[Product Page] Update Product",
            Self::UpdateProductSuccess { .. } => "[Product API] Update Product Success",
            Self::UpdateProductFailure { .. } => "[Product API] Update Product Failure",
            Self::DeleteProduct { .. } => "[Product Page] Delete Product",
            Self::DeleteProductSuccess { .. } => "[Product API] Delete Product Success",
            Self::DeleteProductFailure { .. } => "[Product API] Delete Product Failure",
        }
    }

    /// True for the four actions that need a round trip to the backend.
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            Self::LoadProducts
                | Self::CreateProduct { .. }
                | Self::UpdateProduct { .. }
                | Self::DeleteProduct { .. }
        )
    }
}
