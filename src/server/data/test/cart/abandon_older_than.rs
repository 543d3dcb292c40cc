use super::*;

/// Backdates a cart's `updated_at` so it falls behind the sweep cutoff.
async fn backdate(
    db: &sea_orm::DatabaseConnection,
    cart: entity::cart::Model,
    days: i64,
) -> Result<(), DbErr> {
    let mut active_model: entity::cart::ActiveModel = cart.into();
    active_model.updated_at = ActiveValue::Set(Utc::now() - Duration::days(days));
    active_model.update(db).await?;

    Ok(())
}

/// Tests that the sweep abandons only carts untouched past the cutoff.
///
/// A backdated cart is abandoned and loses its owner key; a freshly touched
/// cart stays active.
///
/// Expected: Ok(1) with only the stale cart transitioned
#[tokio::test]
async fn abandons_only_stale_active_carts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CartRepository::new(db);
    let stale = repo
        .get_or_create(&OwnerKey::Session("stale".to_string()))
        .await?;
    let fresh = repo
        .get_or_create(&OwnerKey::Session("fresh".to_string()))
        .await?;

    backdate(db, stale.clone(), 10).await?;

    let swept = repo.abandon_older_than(Utc::now() - Duration::days(7)).await?;
    assert_eq!(swept, 1);

    let stale = entity::prelude::Cart::find_by_id(stale.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stale.status, CartStatus::Abandoned);
    assert_eq!(stale.owner_key, None);

    let fresh = entity::prelude::Cart::find_by_id(fresh.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(fresh.status, CartStatus::Active);
    assert!(fresh.owner_key.is_some());

    Ok(())
}

/// Tests that converted carts are not touched by the sweep even when stale.
///
/// Expected: Ok(0) with the converted cart unchanged
#[tokio::test]
async fn leaves_converted_carts_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CartRepository::new(db);
    let cart = repo
        .get_or_create(&OwnerKey::Session("done".to_string()))
        .await?;
    repo.mark_converted(cart.clone()).await?;

    let converted = entity::prelude::Cart::find_by_id(cart.id)
        .one(db)
        .await?
        .unwrap();
    backdate(db, converted, 30).await?;

    let swept = repo.abandon_older_than(Utc::now() - Duration::days(7)).await?;
    assert_eq!(swept, 0);

    let unchanged = entity::prelude::Cart::find_by_id(cart.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(unchanged.status, CartStatus::Converted);

    Ok(())
}
