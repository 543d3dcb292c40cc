use super::*;

/// Tests the full pricing path on a discounted product.
///
/// Price 1500 with a 20% discount snapshots a unit price of 1200; quantity 2
/// gives subtotal 2400, tax 360 at the default 15% rate, total 2760.
///
/// Expected: Ok with one line and exactly those totals
#[tokio::test]
async fn snapshots_discounted_price_and_derives_totals() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .price_cents(1500)
        .discount_percent(Some(20))
        .stock(5)
        .build()
        .await?;

    let service = CartService::new(db, CartConfig::default());
    let owner = OwnerKey::Session("pricing".to_string());

    let cart = service.add_item(&owner, product.id, 2).await?;

    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].item.quantity, 2);
    assert_eq!(cart.lines[0].item.unit_price_cents, 1200);
    assert_eq!(cart.totals.total_items, 2);
    assert_eq!(cart.totals.subtotal_cents, 2400);
    assert_eq!(cart.totals.tax_cents, 360);
    assert_eq!(cart.totals.total_cents, 2760);

    Ok(())
}

/// Tests that re-adding a product merges into one line instead of
/// duplicating the row.
///
/// Expected: Ok with a single line of quantity 5
#[tokio::test]
async fn merges_same_product_into_single_line() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(5)
        .build()
        .await?;

    let service = CartService::new(db, CartConfig::default());
    let owner = OwnerKey::Session("merge".to_string());

    service.add_item(&owner, product.id, 2).await?;
    let cart = service.add_item(&owner, product.id, 3).await?;

    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].item.quantity, 5);

    let rows = entity::prelude::CartItem::find().count(db).await?;
    assert_eq!(rows, 1);

    Ok(())
}

/// Tests that an over-stock add fails without creating a partial row.
///
/// Expected: Err(InsufficientStock) carrying the available stock, cart empty
#[tokio::test]
async fn insufficient_stock_leaves_cart_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(3)
        .build()
        .await?;

    let service = CartService::new(db, CartConfig::default());
    let owner = OwnerKey::Session("overstock".to_string());

    let result = service.add_item(&owner, product.id, 5).await;

    match result.unwrap_err() {
        AppError::CartErr(CartError::InsufficientStock {
            available_stock,
            current_in_cart,
        }) => {
            assert_eq!(available_stock, 3);
            assert_eq!(current_in_cart, None);
        }
        e => panic!("Expected InsufficientStock, got: {:?}", e),
    }

    let rows = entity::prelude::CartItem::find().count(db).await?;
    assert_eq!(rows, 0);

    Ok(())
}

/// Tests that the stock check covers quantity already in the cart.
///
/// With stock 5 and 3 in the cart, adding 3 more must fail and report the
/// merge context; the existing line stays at its old quantity.
///
/// Expected: Err(InsufficientStock) with `current_in_cart` set
#[tokio::test]
async fn merge_exceeding_stock_reports_cart_quantity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(5)
        .build()
        .await?;

    let service = CartService::new(db, CartConfig::default());
    let owner = OwnerKey::Session("merge-overstock".to_string());

    service.add_item(&owner, product.id, 3).await?;
    let result = service.add_item(&owner, product.id, 3).await;

    match result.unwrap_err() {
        AppError::CartErr(CartError::InsufficientStock {
            available_stock,
            current_in_cart,
        }) => {
            assert_eq!(available_stock, 5);
            assert_eq!(current_in_cart, Some(3));
        }
        e => panic!("Expected InsufficientStock, got: {:?}", e),
    }

    let cart = service.get_or_create(&owner).await?;
    assert_eq!(cart.lines[0].item.quantity, 3);

    Ok(())
}

/// Tests that merging re-snapshots the unit price from the current catalog
/// price, not the price at the first add.
///
/// Expected: Ok with the whole merged line at the new price
#[tokio::test]
async fn merge_resnapshots_current_price() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .price_cents(1000)
        .stock(10)
        .build()
        .await?;

    let service = CartService::new(db, CartConfig::default());
    let owner = OwnerKey::Session("reprice".to_string());

    service.add_item(&owner, product.id, 1).await?;
    reprice_product(db, product.clone(), 2000).await?;
    let cart = service.add_item(&owner, product.id, 1).await?;

    assert_eq!(cart.lines[0].item.quantity, 2);
    assert_eq!(cart.lines[0].item.unit_price_cents, 2000);
    assert_eq!(cart.totals.subtotal_cents, 4000);

    Ok(())
}

/// Tests that unknown and deactivated products read as not found.
#[tokio::test]
async fn rejects_missing_or_inactive_product() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let inactive = factory::product::ProductFactory::new(db)
        .is_active(false)
        .build()
        .await?;

    let service = CartService::new(db, CartConfig::default());
    let owner = OwnerKey::Session("missing".to_string());

    assert!(matches!(
        service.add_item(&owner, inactive.id, 1).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.add_item(&owner, inactive.id + 999, 1).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests the quantity bounds: zero is rejected, and a merge may not push the
/// line past the configured cap.
///
/// Expected: Err(InvalidQuantity) in both cases
#[tokio::test]
async fn enforces_quantity_bounds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(100)
        .build()
        .await?;

    let config = CartConfig {
        max_item_quantity: 10,
        ..CartConfig::default()
    };
    let service = CartService::new(db, config);
    let owner = OwnerKey::Session("bounds".to_string());

    assert!(matches!(
        service.add_item(&owner, product.id, 0).await,
        Err(AppError::CartErr(CartError::InvalidQuantity { max: 10 }))
    ));

    service.add_item(&owner, product.id, 8).await?;
    assert!(matches!(
        service.add_item(&owner, product.id, 5).await,
        Err(AppError::CartErr(CartError::InvalidQuantity { max: 10 }))
    ));

    let cart = service.get_or_create(&owner).await?;
    assert_eq!(cart.lines[0].item.quantity, 8);

    Ok(())
}
