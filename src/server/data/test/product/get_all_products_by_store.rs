use super::*;

/// Tests filtering the seed catalog by store.
///
/// Verifies that exactly the three "ABC TECH" products are returned.
///
/// Expected: Ok(Vec) with three products
#[tokio::test]
async fn returns_only_products_of_store() -> Result<(), AppError> {
    let repo = repository_with_seed_catalog().await?;

    let products = repo.get_all_products_by_store("ABC TECH").await?;

    let expected: Vec<Product> = seed_catalog()
        .into_iter()
        .filter(|p| p.store == "ABC TECH")
        .collect();
    assert_eq!(products.len(), 3);
    assert_eq!(products, expected);

    Ok(())
}

/// Tests that store matching is exact.
///
/// Verifies that neither a differently-cased nor a partial store name matches.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn matches_store_name_exactly() -> Result<(), AppError> {
    let repo = repository_with_seed_catalog().await?;

    assert!(repo.get_all_products_by_store("abc tech").await?.is_empty());
    assert!(repo.get_all_products_by_store("ABC").await?.is_empty());

    Ok(())
}

/// Tests filtering by a store with a non-ASCII name.
///
/// Expected: Ok(Vec) with the single "Dekorasyon Sarayı" product
#[tokio::test]
async fn returns_products_of_non_ascii_store() -> Result<(), AppError> {
    let repo = repository_with_seed_catalog().await?;

    let products = repo.get_all_products_by_store("Dekorasyon Sarayı").await?;

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Lambader");

    Ok(())
}

/// Tests that a failing query is reported.
///
/// Expected: Err(AppError::Storage)
#[tokio::test]
async fn surfaces_query_failure() -> Result<(), AppError> {
    let repo = repository_without_tables().await;

    let result = repo.get_all_products_by_store("ABC TECH").await;

    assert!(matches!(result, Err(AppError::Storage { .. })));

    Ok(())
}
