//! Domain & parameter models for product operations
//!
//! Defines the product domain model and the creation parameters, and provides the
//! conversions from entity models, from request DTOs and into response DTOs.

use crate::model::product::{AddProductDto, ProductDto};

/// The product domain model
///
/// `id` is assigned by storage; a product that has been persisted always carries a
/// non-zero id.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    /// Discount percentage.
    pub discount: f64,
    pub store: String,
}

impl Product {
    /// Converts an entity model to the product domain model
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            discount: entity.discount,
            store: entity.store,
        }
    }

    /// Converts the domain model into the response DTO, dropping the id.
    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            name: self.name,
            price: self.price,
            discount: self.discount,
            store: self.store,
        }
    }
}

/// Parameters for creating a new product
///
/// Carries every product field except the id, which storage assigns on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductParams {
    pub name: String,
    pub price: f64,
    pub discount: f64,
    pub store: String,
}

impl From<AddProductDto> for CreateProductParams {
    fn from(dto: AddProductDto) -> Self {
        Self {
            name: dto.name,
            price: dto.price,
            discount: dto.discount,
            store: dto.store,
        }
    }
}
