use super::*;

/// Tests setting an absolute quantity with a fresh price snapshot.
///
/// Expected: Ok with the new quantity priced at the current catalog price
#[tokio::test]
async fn updates_quantity_and_resnapshots_price() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .price_cents(1000)
        .stock(10)
        .build()
        .await?;

    let service = CartService::new(db, CartConfig::default());
    let owner = OwnerKey::Session("update".to_string());

    let cart = service.add_item(&owner, product.id, 2).await?;
    let item_id = cart.lines[0].item.id;

    reprice_product(db, product, 1500).await?;
    let cart = service.update_item(&owner, item_id, 4).await?;

    assert_eq!(cart.lines[0].item.quantity, 4);
    assert_eq!(cart.lines[0].item.unit_price_cents, 1500);
    assert_eq!(cart.totals.subtotal_cents, 6000);

    Ok(())
}

/// Tests that a line belonging to another owner's cart reads as not found
/// and is left untouched.
///
/// Expected: Err(ItemNotFound), foreign line unchanged
#[tokio::test]
async fn foreign_cart_line_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(10)
        .build()
        .await?;

    let service = CartService::new(db, CartConfig::default());
    let owner = OwnerKey::Session("owner".to_string());
    let intruder = OwnerKey::Session("intruder".to_string());

    let cart = service.add_item(&owner, product.id, 2).await?;
    let item_id = cart.lines[0].item.id;

    // The intruder needs a cart of their own for the ownership check to run.
    service.get_or_create(&intruder).await?;

    assert!(matches!(
        service.update_item(&intruder, item_id, 5).await,
        Err(AppError::CartErr(CartError::ItemNotFound))
    ));

    let unchanged = service.get_or_create(&owner).await?;
    assert_eq!(unchanged.lines[0].item.quantity, 2);

    Ok(())
}

/// Tests that updating past current stock fails and keeps the old quantity.
///
/// Expected: Err(InsufficientStock), line unchanged
#[tokio::test]
async fn exceeding_stock_fails_without_mutation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(4)
        .build()
        .await?;

    let service = CartService::new(db, CartConfig::default());
    let owner = OwnerKey::Session("stock-limit".to_string());

    let cart = service.add_item(&owner, product.id, 2).await?;
    let item_id = cart.lines[0].item.id;

    match service.update_item(&owner, item_id, 9).await.unwrap_err() {
        AppError::CartErr(CartError::InsufficientStock {
            available_stock, ..
        }) => assert_eq!(available_stock, 4),
        e => panic!("Expected InsufficientStock, got: {:?}", e),
    }

    let unchanged = service.get_or_create(&owner).await?;
    assert_eq!(unchanged.lines[0].item.quantity, 2);

    Ok(())
}
