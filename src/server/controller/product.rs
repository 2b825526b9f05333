use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        product::{AddProductDto, ProductDto},
    },
    server::{
        error::AppError,
        model::product::{CreateProductParams, Product},
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

#[derive(Deserialize)]
pub struct StoreFilterParams {
    pub store: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdatePriceParams {
    #[serde(rename = "newPrice")]
    pub new_price: f64,
}

/// List products, optionally filtered by store.
///
/// Returns every product, or only those whose store matches the `store` query
/// parameter exactly when it is given.
///
/// # Returns
/// - `200 OK` - List of products (possibly empty)
/// - `400 Bad Request` - Malformed query string
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = PRODUCT_TAG,
    params(
        ("store" = Option<String>, Query, description = "Only return products of this store")
    ),
    responses(
        (status = 200, description = "Successfully retrieved products", body = [ProductDto]),
        (status = 400, description = "Malformed query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    params: Result<Query<StoreFilterParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    let products = match params.store {
        Some(store) => {
            state
                .product_service
                .get_all_products_by_store(&store)
                .await?
        }
        None => state.product_service.get_all_products().await?,
    };

    let dto: Vec<ProductDto> = products.into_iter().map(Product::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a product by ID.
///
/// # Returns
/// - `200 OK` - The product
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No product with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved product", body = ProductDto),
        (status = 400, description = "Invalid product ID", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let product = state.product_service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Create a new product.
///
/// The discount may not exceed 70 percent.
///
/// # Returns
/// - `201 Created` - The created product
/// - `400 Bad Request` - Discount above the limit or malformed JSON
/// - `422 Unprocessable Entity` - JSON with missing or mistyped fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = PRODUCT_TAG,
    request_body = AddProductDto,
    responses(
        (status = 201, description = "Successfully created product", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 422, description = "Request body does not match the product shape", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_product(
    State(state): State<AppState>,
    payload: Result<Json<AddProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let product = state
        .product_service
        .add(CreateProductParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// Update the price of a product.
///
/// Any finite price is applied as is. Updating an ID that does not exist succeeds
/// without changing anything.
///
/// # Returns
/// - `200 OK` - Price updated
/// - `400 Bad Request` - Invalid ID or `newPrice`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i64, Path, description = "Product ID"),
        ("newPrice" = f64, Query, description = "New product price")
    ),
    responses(
        (status = 200, description = "Successfully updated product price"),
        (status = 400, description = "Invalid product ID or price", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product_price(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    params: Result<Query<UpdatePriceParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Query(params) = params?;

    // NaN and infinities parse as f64 but have no JSON representation.
    if !params.new_price.is_finite() {
        return Err(AppError::Validation(format!(
            "newPrice must be a finite number, got {}",
            params.new_price
        )));
    }

    state
        .product_service
        .update_price(id, params.new_price)
        .await?;

    Ok(StatusCode::OK)
}

/// Delete a product by ID.
///
/// # Returns
/// - `200 OK` - Product deleted
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No product with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted product"),
        (status = 400, description = "Invalid product ID", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product_by_id(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    state.product_service.delete_by_id(id).await?;

    Ok(StatusCode::OK)
}
