use super::*;

/// Tests removing one of two lines.
///
/// Expected: Ok with only the other line remaining
#[tokio::test]
async fn removes_line_from_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::product::ProductFactory::new(db)
        .stock(10)
        .build()
        .await?;
    let second = factory::product::ProductFactory::new(db)
        .stock(10)
        .build()
        .await?;

    let service = CartService::new(db, CartConfig::default());
    let owner = OwnerKey::Session("remove".to_string());

    let cart = service.add_item(&owner, first.id, 1).await?;
    let first_item_id = cart.lines[0].item.id;
    service.add_item(&owner, second.id, 2).await?;

    let cart = service.remove_item(&owner, first_item_id).await?;

    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].item.product_id, second.id);

    Ok(())
}

/// Tests the ownership check on removal: a foreign line is not found and
/// nothing is deleted.
///
/// Expected: Err(ItemNotFound), foreign cart still has its line
#[tokio::test]
async fn foreign_cart_line_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(10)
        .build()
        .await?;

    let service = CartService::new(db, CartConfig::default());
    let owner = OwnerKey::Session("victim".to_string());
    let intruder = OwnerKey::Session("thief".to_string());

    let cart = service.add_item(&owner, product.id, 1).await?;
    let item_id = cart.lines[0].item.id;

    service.get_or_create(&intruder).await?;

    assert!(matches!(
        service.remove_item(&intruder, item_id).await,
        Err(AppError::CartErr(CartError::ItemNotFound))
    ));

    let untouched = service.get_or_create(&owner).await?;
    assert_eq!(untouched.lines.len(), 1);

    Ok(())
}

/// Tests removal of a line id that does not exist at all.
#[tokio::test]
async fn unknown_line_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CartService::new(db, CartConfig::default());
    let owner = OwnerKey::Session("nothing".to_string());

    service.get_or_create(&owner).await?;

    assert!(matches!(
        service.remove_item(&owner, 12345).await,
        Err(AppError::CartErr(CartError::ItemNotFound))
    ));

    Ok(())
}
