use super::*;

/// Tests that a brand-new owner key gets a fresh active cart.
///
/// Expected: Ok with an active cart carrying the owner's key
#[tokio::test]
async fn creates_cart_on_first_access() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let owner = OwnerKey::User(user.id);

    let repo = CartRepository::new(db);
    let cart = repo.get_or_create(&owner).await?;

    assert_eq!(cart.user_id, Some(user.id));
    assert_eq!(cart.session_id, None);
    assert_eq!(cart.owner_key, Some(format!("user:{}", user.id)));
    assert_eq!(cart.status, CartStatus::Active);

    Ok(())
}

/// Tests that repeated calls return the same cart row.
///
/// Expected: Ok with identical cart ids and a single row in the table
#[tokio::test]
async fn returns_existing_cart_on_second_call() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = OwnerKey::Session("abc123".to_string());

    let repo = CartRepository::new(db);
    let first = repo.get_or_create(&owner).await?;
    let second = repo.get_or_create(&owner).await?;

    assert_eq!(first.id, second.id);

    let count = entity::prelude::Cart::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests the find-or-create under concurrent first-time access.
///
/// Two tasks race to create the same owner's cart; the insert-on-conflict
/// must leave exactly one active row that both callers observe.
///
/// Expected: Ok with one cart row, same id from both calls
#[tokio::test]
async fn concurrent_calls_converge_on_single_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = OwnerKey::Session("race".to_string());
    let repo = CartRepository::new(db);

    let (first, second) = tokio::join!(repo.get_or_create(&owner), repo.get_or_create(&owner));

    assert_eq!(first?.id, second?.id);

    let count = entity::prelude::Cart::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that different owner keys resolve to different carts.
///
/// Expected: Ok with two distinct cart rows
#[tokio::test]
async fn distinct_owners_get_distinct_carts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = CartRepository::new(db);
    let user_cart = repo.get_or_create(&OwnerKey::User(user.id)).await?;
    let anon_cart = repo
        .get_or_create(&OwnerKey::Session("anon".to_string()))
        .await?;

    assert_ne!(user_cart.id, anon_cart.id);

    Ok(())
}

/// Tests that conversion releases the owner key, so the next access starts a
/// fresh active cart while the converted row is preserved.
///
/// Expected: Ok with a new cart id and the old row still converted
#[tokio::test]
async fn creates_fresh_cart_after_conversion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = OwnerKey::Session("converted".to_string());

    let repo = CartRepository::new(db);
    let original = repo.get_or_create(&owner).await?;
    repo.mark_converted(original.clone()).await?;

    let fresh = repo.get_or_create(&owner).await?;

    assert_ne!(original.id, fresh.id);
    assert_eq!(fresh.status, CartStatus::Active);

    let converted = entity::prelude::Cart::find_by_id(original.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(converted.status, CartStatus::Converted);
    assert_eq!(converted.owner_key, None);

    Ok(())
}
