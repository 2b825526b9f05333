//! Product App Test Utils
//!
//! Provides shared testing utilities for the product application. This crate offers a
//! builder for creating test contexts backed by in-memory SQLite databases, factories that
//! insert product rows, and fixtures that build entity models without touching a database.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserting builders for product rows
//! - **fixture**: In-memory product entity models and the seed catalog
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_product_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_product_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let product = factory::product::create_product(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
