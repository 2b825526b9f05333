use std::sync::Arc;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::product::{CreateProductParams, Product},
};

/// Highest discount percentage accepted when a product is created.
pub const MAX_DISCOUNT: f64 = 70.0;

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Validates and creates a new product
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product with its storage-assigned id
    /// - `Err(AppError::Validation)` - Discount is greater than 70; the repository is not called
    /// - `Err(AppError::Storage)` - Insert failed
    pub async fn add(&self, params: CreateProductParams) -> Result<Product, AppError> {
        validate_create_params(&params)?;

        self.repository.create_product(params).await
    }

    pub async fn delete_by_id(&self, product_id: i64) -> Result<(), AppError> {
        self.repository.delete_by_id(product_id).await
    }

    pub async fn get_by_id(&self, product_id: i64) -> Result<Product, AppError> {
        self.repository.get_by_id(product_id).await
    }

    /// Sets a product's price. The new price is not validated.
    pub async fn update_price(&self, product_id: i64, new_price: f64) -> Result<(), AppError> {
        self.repository
            .update_price_by_id(product_id, new_price)
            .await
    }

    pub async fn get_all_products(&self) -> Result<Vec<Product>, AppError> {
        self.repository.get_all_products().await
    }

    pub async fn get_all_products_by_store(
        &self,
        store_name: &str,
    ) -> Result<Vec<Product>, AppError> {
        self.repository.get_all_products_by_store(store_name).await
    }
}

fn validate_create_params(params: &CreateProductParams) -> Result<(), AppError> {
    if params.discount > MAX_DISCOUNT {
        return Err(AppError::Validation(
            "Discount can not be greater than 70".to_string(),
        ));
    }

    Ok(())
}
