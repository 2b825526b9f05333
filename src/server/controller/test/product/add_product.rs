use super::*;

#[tokio::test]
async fn creates_product_and_returns_201() {
    let app = seeded_app();
    let request = json!({ "name": "Kitap", "price": 10.0, "discount": 10.0, "store": "Kumcu Kırtasiye" });

    let (status, body) = send(&app, Method::POST, "/api/v1/products", Some(request.clone())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, request);

    let (_, created) = send(&app, Method::GET, "/api/v1/products/5", None).await;
    assert_eq!(created, request);
}

#[tokio::test]
async fn rejects_discount_above_70() {
    let app = seeded_app();
    let request = json!({ "name": "Kitap", "price": 10.0, "discount": 80.0, "store": "Kumcu Kırtasiye" });

    let (status, body) = send(&app, Method::POST, "/api/v1/products", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "errorDescription": "Discount can not be greater than 70" })
    );

    let (_, all) = send(&app, Method::GET, "/api/v1/products", None).await;
    assert_eq!(all.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn rejects_body_missing_fields() {
    let app = seeded_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/products",
        Some(json!({ "name": "Kitap" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["errorDescription"].is_string());
}

#[tokio::test]
async fn rejects_body_without_json_content_type() {
    let app = seeded_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/products")
        .body(Body::from(
            json!({ "name": "Kitap", "price": 10.0, "discount": 10.0, "store": "Kumcu Kırtasiye" })
                .to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["errorDescription"]
        .as_str()
        .unwrap()
        .contains("Content-Type"));

    let (_, all) = send(&app, Method::GET, "/api/v1/products", None).await;
    assert_eq!(all.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn rejects_malformed_json() {
    let app = seeded_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/products")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
