use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a product.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AddProductDto {
    pub name: String,
    pub price: f64,
    pub discount: f64,
    pub store: String,
}

/// Product as returned by the API. The storage id is not exposed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ProductDto {
    pub name: String,
    pub price: f64,
    pub discount: f64,
    pub store: String,
}
