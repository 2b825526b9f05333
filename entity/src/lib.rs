//! SeaORM entity models for the product database.

pub mod prelude;

pub mod product;
