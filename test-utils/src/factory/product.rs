//! Product factory for creating test product rows.
//!
//! Provides a builder that inserts product rows with sensible defaults and a helper
//! that inserts the four-row seed catalog used by listing and filtering tests.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::product::ProductFactory;
///
/// let product = ProductFactory::new(&db)
///     .name("AirFryer")
///     .price(3000.0)
///     .discount(22.0)
///     .store("ABC TECH")
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: f64,
    discount: f64,
    store: String,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Product {n}"` where n is auto-incremented
    /// - price, discount, store: the values of `fixture::product::entity()`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ProductFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Product {}", id),
            price: fixture::product::DEFAULT_PRICE,
            discount: fixture::product::DEFAULT_DISCOUNT,
            store: fixture::product::DEFAULT_STORE.to_string(),
        }
    }

    /// Sets the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the product price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the discount percentage.
    ///
    /// The factory writes straight to the table, so values above the creation limit
    /// are accepted here.
    pub fn discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    /// Sets the store name.
    pub fn store(mut self, store: impl Into<String>) -> Self {
        self.store = store.into();
        self
    }

    /// Builds and inserts the product entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::product::Model)` - Created product with its storage-assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            discount: ActiveValue::Set(self.discount),
            store: ActiveValue::Set(self.store),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values.
///
/// Shorthand for `ProductFactory::new(db).build().await`.
///
/// # Returns
/// - `Ok(entity::product::Model)` - Created product entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}

/// Inserts the seed catalog in order and returns the stored rows.
///
/// On a fresh table the rows receive ids 1 through 4. Three products belong to
/// `"ABC TECH"` and one to `"Dekorasyon Sarayı"`.
///
/// # Returns
/// - `Ok(Vec<entity::product::Model>)` - The four inserted rows in insertion order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_seed_catalog(
    db: &DatabaseConnection,
) -> Result<Vec<entity::product::Model>, DbErr> {
    let mut inserted = Vec::new();

    for product in fixture::product::seed_catalog() {
        let model = ProductFactory::new(db)
            .name(product.name)
            .price(product.price)
            .discount(product.discount)
            .store(product.store)
            .build()
            .await?;
        inserted.push(model);
    }

    Ok(inserted)
}
