use super::*;

/// Tests fetching an existing product by id.
///
/// Expected: Ok(Product) equal to the first seed product
#[tokio::test]
async fn returns_product_for_existing_id() -> Result<(), AppError> {
    let repo = repository_with_seed_catalog().await?;

    let product = repo.get_by_id(1).await?;

    assert_eq!(
        product,
        Product {
            id: 1,
            name: "AirFryer".to_string(),
            price: 3000.0,
            discount: 22.0,
            store: "ABC TECH".to_string(),
        }
    );

    Ok(())
}

/// Tests fetching a nonexistent product.
///
/// Verifies that the not-found message names the requested id.
///
/// Expected: Err(AppError::NotFound("Product not found with id 5"))
#[tokio::test]
async fn fails_with_not_found_for_missing_id() -> Result<(), AppError> {
    let repo = repository_with_seed_catalog().await?;

    let result = repo.get_by_id(5).await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Product not found with id 5"),
        other => panic!("expected not found, got {:?}", other),
    }

    Ok(())
}

/// Tests that a failing lookup is distinguished from a missing row.
///
/// Expected: Err(AppError::Storage)
#[tokio::test]
async fn surfaces_query_failure_distinctly() -> Result<(), AppError> {
    let repo = repository_without_tables().await;

    let result = repo.get_by_id(1).await;

    assert!(matches!(result, Err(AppError::Storage { .. })));

    Ok(())
}
