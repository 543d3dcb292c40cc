use super::*;

/// Tests inserting lines and loading them joined with their products.
///
/// Expected: Ok with lines in insertion order, each carrying its product
#[tokio::test]
async fn inserts_and_loads_lines_with_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::product::create_product(db).await?;
    let second = factory::product::create_product(db).await?;

    let repo = CartRepository::new(db);
    let cart = repo
        .get_or_create(&OwnerKey::Session("lines".to_string()))
        .await?;

    repo.insert_item(cart.id, first.id, 2, 1000).await?;
    repo.insert_item(cart.id, second.id, 1, 500).await?;

    let lines = repo.load_lines(cart.id).await?;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].item.product_id, first.id);
    assert_eq!(lines[0].item.quantity, 2);
    assert_eq!(lines[0].product.as_ref().unwrap().id, first.id);
    assert_eq!(lines[1].item.product_id, second.id);
    assert_eq!(lines[1].product.as_ref().unwrap().id, second.id);

    Ok(())
}

/// Tests the unique (cart, product) lookup.
///
/// Expected: Ok(Some) for a present product, Ok(None) otherwise
#[tokio::test]
async fn finds_item_by_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;
    let other = factory::product::create_product(db).await?;

    let repo = CartRepository::new(db);
    let cart = repo
        .get_or_create(&OwnerKey::Session("lookup".to_string()))
        .await?;

    repo.insert_item(cart.id, product.id, 1, 1000).await?;

    let found = repo.find_item_by_product(cart.id, product.id).await?;
    assert!(found.is_some());

    let missing = repo.find_item_by_product(cart.id, other.id).await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests rewriting a line's quantity and price snapshot.
///
/// Expected: Ok with both fields updated in the database
#[tokio::test]
async fn updates_quantity_and_price_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;

    let repo = CartRepository::new(db);
    let cart = repo
        .get_or_create(&OwnerKey::Session("rewrite".to_string()))
        .await?;

    let item = repo.insert_item(cart.id, product.id, 1, 1000).await?;
    let updated = repo.update_item(item, 4, 900).await?;

    assert_eq!(updated.quantity, 4);
    assert_eq!(updated.unit_price_cents, 900);

    let stored = entity::prelude::CartItem::find_by_id(updated.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.quantity, 4);
    assert_eq!(stored.unit_price_cents, 900);

    Ok(())
}

/// Tests deleting a single line.
#[tokio::test]
async fn deletes_single_line() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;

    let repo = CartRepository::new(db);
    let cart = repo
        .get_or_create(&OwnerKey::Session("delete".to_string()))
        .await?;

    let item = repo.insert_item(cart.id, product.id, 1, 1000).await?;
    repo.delete_item(item.id).await?;

    let remaining = repo.load_lines(cart.id).await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Tests clearing all lines, and that clearing again is a no-op.
///
/// Expected: Ok(2) on the first clear, Ok(0) on the second
#[tokio::test]
async fn clears_all_lines_idempotently() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::product::create_product(db).await?;
    let second = factory::product::create_product(db).await?;

    let repo = CartRepository::new(db);
    let cart = repo
        .get_or_create(&OwnerKey::Session("clear".to_string()))
        .await?;

    repo.insert_item(cart.id, first.id, 1, 1000).await?;
    repo.insert_item(cart.id, second.id, 2, 500).await?;

    assert_eq!(repo.clear_items(cart.id).await?, 2);
    assert_eq!(repo.clear_items(cart.id).await?, 0);

    Ok(())
}
