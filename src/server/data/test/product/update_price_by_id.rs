use super::*;

/// Tests updating the price of an existing product.
///
/// Verifies that only the price changes.
///
/// Expected: Ok(()) with the new price persisted and other fields unchanged
#[tokio::test]
async fn updates_price_only() -> Result<(), AppError> {
    let repo = repository_with_seed_catalog().await?;

    let before = repo.get_by_id(1).await?;
    assert_eq!(before.price, 3000.0);

    repo.update_price_by_id(1, 2500.0).await?;

    let after = repo.get_by_id(1).await?;
    assert_eq!(
        after,
        Product {
            price: 2500.0,
            ..before
        }
    );

    Ok(())
}

/// Tests updating the price of a nonexistent product.
///
/// Verifies that affecting zero rows is not an error and no row is created.
///
/// Expected: Ok(())
#[tokio::test]
async fn succeeds_for_missing_id() -> Result<(), AppError> {
    let repo = repository_with_seed_catalog().await?;

    repo.update_price_by_id(99, 1.0).await?;

    assert_eq!(repo.get_all_products().await?, seed_catalog());

    Ok(())
}

/// Tests that a failing update statement is wrapped with the product id.
///
/// Expected: Err(AppError::Storage) whose context names the id
#[tokio::test]
async fn fails_when_statement_fails() -> Result<(), AppError> {
    let repo = repository_without_tables().await;

    let result = repo.update_price_by_id(3, 1.0).await;

    match result {
        Err(AppError::Storage { context, .. }) => {
            assert_eq!(context, "Error while updating product with id 3")
        }
        other => panic!("expected storage error, got {:?}", other),
    }

    Ok(())
}
