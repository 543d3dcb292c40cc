use super::*;

/// Tests that cancellation is a status change only: the order row survives
/// and the stock consumed at placement is not restored.
///
/// Expected: Ok with status cancelled and stock unchanged
#[tokio::test]
async fn cancel_keeps_record_and_stock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .stock(5)
        .build()
        .await?;

    let cart_service = CartService::new(db, CartConfig::default());
    let order_service = OrderService::new(db, CartConfig::default());
    let owner = OwnerKey::User(user.id);

    cart_service.add_item(&owner, product.id, 2).await?;
    let order = order_service
        .place(&owner, Some(&user), no_overrides())
        .await?;

    let cancelled = order_service.cancel(order.id).await?.unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);

    let stocked = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stocked.stock, 3);

    Ok(())
}

/// Tests cancelling an unknown order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn cancel_of_unknown_order_is_none() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order_service = OrderService::new(db, CartConfig::default());

    assert!(order_service.cancel(999).await?.is_none());

    Ok(())
}
