use super::*;

use entity::cart::CartStatus;

/// Tests lazy creation on first cart access.
///
/// Expected: Ok with an empty active cart and zeroed totals
#[tokio::test]
async fn creates_empty_cart_on_first_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = CartService::new(db, CartConfig::default());

    let cart = service.get_or_create(&OwnerKey::User(user.id)).await?;

    assert_eq!(cart.cart.status, CartStatus::Active);
    assert_eq!(cart.cart.user_id, Some(user.id));
    assert!(cart.lines.is_empty());
    assert_eq!(cart.totals.total_items, 0);
    assert_eq!(cart.totals.subtotal_cents, 0);

    Ok(())
}

/// Tests that concurrent first-time access for one owner yields a single
/// active cart.
///
/// Expected: Ok with the same cart id from both calls and one row
#[tokio::test]
async fn concurrent_access_yields_single_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CartService::new(db, CartConfig::default());
    let owner = OwnerKey::Session("simultaneous".to_string());

    let (first, second) = tokio::join!(
        service.get_or_create(&owner),
        service.get_or_create(&owner)
    );

    assert_eq!(first?.cart.id, second?.cart.id);

    let count = entity::prelude::Cart::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
