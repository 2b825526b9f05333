//! Factory methods for creating test data.
//!
//! Factories insert rows into the test database with sensible defaults, reducing
//! boilerplate in tests. Each entity has its own factory module with both a `Factory`
//! struct for customization and a `create_*` convenience function for quick default
//! creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let product = factory::product::create_product(&db).await?;
//!
//!     // Insert the four-row seed catalog
//!     let catalog = factory::product::create_seed_catalog(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let product = factory::product::ProductFactory::new(&db)
//!     .name("Kitap")
//!     .price(10.0)
//!     .store("Kumcu Kırtasiye")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod product;

pub use product::{create_product, create_seed_catalog};
