use super::*;

/// Tests emptying a cart with lines.
///
/// Expected: Ok with no lines and zeroed totals
#[tokio::test]
async fn clears_all_lines() -> Result<(), AppError> {
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
    let owner = OwnerKey::Session("full".to_string());

    service.add_item(&owner, first.id, 1).await?;
    service.add_item(&owner, second.id, 3).await?;

    let cart = service.clear(&owner).await?;

    assert!(cart.lines.is_empty());
    assert_eq!(cart.totals.total_items, 0);
    assert_eq!(cart.totals.subtotal_cents, 0);
    assert_eq!(cart.totals.total_cents, 0);

    let rows = entity::prelude::CartItem::find().count(db).await?;
    assert_eq!(rows, 0);

    Ok(())
}

/// Tests that clearing an empty (or brand-new) cart succeeds.
///
/// Expected: Ok both times, same cart row
#[tokio::test]
async fn is_idempotent_on_empty_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CartService::new(db, CartConfig::default());
    let owner = OwnerKey::Session("empty".to_string());

    let first = service.clear(&owner).await?;
    let second = service.clear(&owner).await?;

    assert_eq!(first.cart.id, second.cart.id);
    assert!(second.lines.is_empty());

    Ok(())
}
