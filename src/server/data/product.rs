//! Product data repository for database operations
//!
//! Provides the `ProductRepository` trait describing storage operations for products
//! and `SeaOrmProductRepository`, its implementation over the `products` table.
//! Storage failures are logged and surfaced as `AppError::Storage` with a description
//! of the failed operation; a missing row is surfaced as `AppError::NotFound`.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::product::{CreateProductParams, Product},
};

/// Storage operations for products.
///
/// Implementations own no business rules; validation happens in the service layer.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every stored product.
    async fn get_all_products(&self) -> Result<Vec<Product>, AppError>;

    /// Returns the products whose store matches `store_name` exactly.
    async fn get_all_products_by_store(&self, store_name: &str) -> Result<Vec<Product>, AppError>;

    /// Inserts a product and returns it with its storage-assigned id.
    async fn create_product(&self, params: CreateProductParams) -> Result<Product, AppError>;

    /// Returns the product with the given id.
    ///
    /// # Returns
    /// - `Ok(Product)` - The matching product
    /// - `Err(AppError::NotFound)` - No product has this id
    /// - `Err(AppError::Storage)` - Database error during the lookup
    async fn get_by_id(&self, product_id: i64) -> Result<Product, AppError>;

    /// Deletes the product with the given id after confirming it exists.
    ///
    /// # Returns
    /// - `Ok(())` - The product was deleted
    /// - `Err(AppError::NotFound)` - No product has this id
    /// - `Err(AppError::Storage)` - Database error during the lookup or delete
    async fn delete_by_id(&self, product_id: i64) -> Result<(), AppError>;

    /// Sets the price of the product with the given id.
    ///
    /// Does not check that the product exists; updating a missing id succeeds without
    /// changing anything.
    async fn update_price_by_id(&self, product_id: i64, new_price: f64) -> Result<(), AppError>;
}

/// Repository providing product operations over a SeaORM connection pool.
#[derive(Clone)]
pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    /// Creates a new SeaOrmProductRepository instance
    ///
    /// # Arguments
    /// - `db` - Database connection pool; clones share the pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn get_all_products(&self) -> Result<Vec<Product>, AppError> {
        let products = entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get products from database: {}", e);
                AppError::storage("Failed to get products from database", e)
            })?;

        Ok(products.into_iter().map(Product::from_entity).collect())
    }

    async fn get_all_products_by_store(&self, store_name: &str) -> Result<Vec<Product>, AppError> {
        let products = entity::prelude::Product::find()
            .filter(entity::product::Column::Store.eq(store_name))
            .order_by_asc(entity::product::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get products of store {} from database: {}", store_name, e);
                AppError::storage("Failed to get products from database", e)
            })?;

        Ok(products.into_iter().map(Product::from_entity).collect())
    }

    async fn create_product(&self, params: CreateProductParams) -> Result<Product, AppError> {
        let product = entity::product::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            discount: ActiveValue::Set(params.discount),
            store: ActiveValue::Set(params.store),
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert product into database: {}", e);
            AppError::storage("Failed to insert product into database", e)
        })?;

        tracing::info!("Inserted product {} successfully", product.id);

        Ok(Product::from_entity(product))
    }

    async fn get_by_id(&self, product_id: i64) -> Result<Product, AppError> {
        let product = entity::prelude::Product::find_by_id(product_id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::storage("Failed to get product from database", e))?;

        product
            .map(Product::from_entity)
            .ok_or_else(|| AppError::NotFound(format!("Product not found with id {}", product_id)))
    }

    async fn delete_by_id(&self, product_id: i64) -> Result<(), AppError> {
        self.get_by_id(product_id).await?;

        entity::prelude::Product::delete_by_id(product_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                AppError::storage(format!("Failed to delete product with id {}", product_id), e)
            })?;

        tracing::info!("Deleted product {} successfully", product_id);

        Ok(())
    }

    async fn update_price_by_id(&self, product_id: i64, new_price: f64) -> Result<(), AppError> {
        let result = entity::prelude::Product::update_many()
            .col_expr(entity::product::Column::Price, Expr::value(new_price))
            .filter(entity::product::Column::Id.eq(product_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                AppError::storage(
                    format!("Error while updating product with id {}", product_id),
                    e,
                )
            })?;

        tracing::info!(
            "Product {} price updated with new price {} ({} rows affected)",
            product_id,
            new_price,
            result.rows_affected
        );

        Ok(())
    }
}
