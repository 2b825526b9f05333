mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    data::product::SeaOrmProductRepository,
    error::AppError,
    router,
    service::product::ProductService,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let product_repository = SeaOrmProductRepository::new(db);
    let product_service = ProductService::new(Arc::new(product_repository));

    let app = router::router().with_state(AppState::new(product_service));

    let listener = TcpListener::bind(&config.server_address).await?;
    tracing::info!("Starting server on {}", config.server_address);

    axum::serve(listener, app).await?;

    Ok(())
}
