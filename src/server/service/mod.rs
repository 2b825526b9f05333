//! Service layer for business logic.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They enforce business rules and work with domain models rather than DTOs or entity
//! models.

pub mod product;
