use super::*;

/// Tests that the availability-filtered lookup hides deactivated products.
///
/// Expected: Ok(Some) for active, Ok(None) for deactivated
#[tokio::test]
async fn available_lookup_excludes_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::product::create_product(db).await?;
    let inactive = factory::product::ProductFactory::new(db)
        .is_active(false)
        .build()
        .await?;

    let repo = ProductRepository::new(db);

    assert!(repo.find_available_by_id(active.id).await?.is_some());
    assert!(repo.find_available_by_id(inactive.id).await?.is_none());

    // The unfiltered lookup still sees both.
    assert!(repo.find_by_id(inactive.id).await?.is_some());

    Ok(())
}

/// Tests the stock read used by the cart layer's advisory check.
///
/// Expected: Ok(Some(stock)) for a known product, Ok(None) otherwise
#[tokio::test]
async fn reads_current_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(7)
        .build()
        .await?;

    let repo = ProductRepository::new(db);

    assert_eq!(repo.current_stock(product.id).await?, Some(7));
    assert_eq!(repo.current_stock(product.id + 999).await?, None);

    Ok(())
}
