//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and provide default values
//! for factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let product = fixture::product::entity();
//!
//! // Create with custom fields
//! let lamp = fixture::product::entity_builder()
//!     .name("Lambader")
//!     .store("Dekorasyon Sarayı")
//!     .build();
//! ```

pub mod product;

pub use product::{entity as product_entity, entity_builder as product_entity_builder};
