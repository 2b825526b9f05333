//! Product fixtures for creating in-memory test data.

use entity::product;

/// Default test product name.
pub const DEFAULT_NAME: &str = "Test Product";

/// Default test product price.
pub const DEFAULT_PRICE: f64 = 100.0;

/// Default test product discount percentage.
pub const DEFAULT_DISCOUNT: f64 = 10.0;

/// Default test store name.
pub const DEFAULT_STORE: &str = "Test Store";

/// Creates a product entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Product"`
/// - price: `100.0`
/// - discount: `10.0`
/// - store: `"Test Store"`
pub fn entity() -> product::Model {
    entity_builder().build()
}

/// Creates a product entity builder for customization.
pub fn entity_builder() -> ProductEntityBuilder {
    ProductEntityBuilder::default()
}

/// The seed catalog used by listing and store-filter tests.
///
/// Ids are numbered 1 through 4 in the order a fresh table assigns them.
pub fn seed_catalog() -> Vec<product::Model> {
    vec![
        entity_builder()
            .id(1)
            .name("AirFryer")
            .price(3000.0)
            .discount(22.0)
            .store("ABC TECH")
            .build(),
        entity_builder()
            .id(2)
            .name("Ütü")
            .price(1500.0)
            .discount(10.0)
            .store("ABC TECH")
            .build(),
        entity_builder()
            .id(3)
            .name("Çamaşır Makinesi")
            .price(10000.0)
            .discount(15.0)
            .store("ABC TECH")
            .build(),
        entity_builder()
            .id(4)
            .name("Lambader")
            .price(2000.0)
            .discount(0.0)
            .store("Dekorasyon Sarayı")
            .build(),
    ]
}

/// Builder for creating customized product entity models.
pub struct ProductEntityBuilder {
    id: i64,
    name: String,
    price: f64,
    discount: f64,
    store: String,
}

impl Default for ProductEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            price: DEFAULT_PRICE,
            discount: DEFAULT_DISCOUNT,
            store: DEFAULT_STORE.to_string(),
        }
    }
}

impl ProductEntityBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    pub fn store(mut self, store: impl Into<String>) -> Self {
        self.store = store.into();
        self
    }

    /// Builds and returns the product entity model.
    pub fn build(self) -> product::Model {
        product::Model {
            id: self.id,
            name: self.name,
            price: self.price,
            discount: self.discount,
            store: self.store,
        }
    }
}
