use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller::product, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "Product App", description = "CRUD API for product records"),
    tags((name = "product", description = "Product management endpoints"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(product::get_products, product::add_product))
        .routes(routes!(
            product::get_product_by_id,
            product::update_product_price,
            product::delete_product_by_id
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
