use super::*;

#[tokio::test]
async fn lists_all_products_without_ids() {
    let app = seeded_app();

    let (status, body) = send(&app, Method::GET, "/api/v1/products", None).await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 4);
    assert_eq!(
        products[0],
        json!({ "name": "AirFryer", "price": 3000.0, "discount": 22.0, "store": "ABC TECH" })
    );
    assert!(products.iter().all(|p| p.get("id").is_none()));
}

#[tokio::test]
async fn filters_by_store_query() {
    let app = seeded_app();

    let (status, body) = send(&app, Method::GET, "/api/v1/products?store=ABC%20TECH", None).await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 3);
    assert!(products.iter().all(|p| p["store"] == "ABC TECH"));
}

#[tokio::test]
async fn returns_empty_list_for_unknown_store() {
    let app = seeded_app();

    let (status, body) = send(&app, Method::GET, "/api/v1/products?store=Nowhere", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn serves_openapi_document() {
    let app = seeded_app();

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/v1/products").is_some());
    assert!(body["paths"].get("/api/v1/products/{id}").is_some());
}
