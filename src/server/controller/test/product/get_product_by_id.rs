use super::*;

#[tokio::test]
async fn returns_product() {
    let app = seeded_app();

    let (status, body) = send(&app, Method::GET, "/api/v1/products/4", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "name": "Lambader", "price": 2000.0, "discount": 0.0, "store": "Dekorasyon Sarayı" })
    );
}

#[tokio::test]
async fn returns_404_with_description_for_missing_id() {
    let app = seeded_app();

    let (status, body) = send(&app, Method::GET, "/api/v1/products/5", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "errorDescription": "Product not found with id 5" })
    );
}

#[tokio::test]
async fn returns_400_for_non_numeric_id() {
    let app = seeded_app();

    let (status, body) = send(&app, Method::GET, "/api/v1/products/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errorDescription"].is_string());
}
