//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request handler
//! through Axum's state extraction.

use crate::server::service::product::ProductService;

/// Application state containing shared dependencies.
///
/// Cloning is cheap: the product service holds its repository behind an `Arc`, and the
/// SeaORM repository wraps a pooled `DatabaseConnection`.
#[derive(Clone)]
pub struct AppState {
    /// Product business logic, wired to a concrete repository at startup.
    pub product_service: ProductService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(product_service: ProductService) -> Self {
        Self { product_service }
    }
}
