use super::*;

/// Tests the whole checkout path for an authenticated customer.
///
/// A cart holding two units of a discounted product becomes a pending order:
/// amount 2760 (subtotal 2400 + 15% tax), stock decremented from 5 to 3, the
/// lines snapshotted into the order, and the cart marked converted with its
/// owner key released.
///
/// Expected: Ok with the order, stock, and cart all in their post-checkout state
#[tokio::test]
async fn places_order_from_active_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .price_cents(1500)
        .discount_percent(Some(20))
        .stock(5)
        .build()
        .await?;

    let cart_service = CartService::new(db, CartConfig::default());
    let order_service = OrderService::new(db, CartConfig::default());
    let owner = OwnerKey::User(user.id);

    let cart = cart_service.add_item(&owner, product.id, 2).await?;

    let order = order_service
        .place(&owner, Some(&user), no_overrides())
        .await?;

    assert_eq!(order.amount_cents, 2760);
    assert_eq!(order.user_id, Some(user.id));
    assert_eq!(order.customer_name, user.name);
    assert_eq!(order.customer_email, user.email);
    assert_eq!(order.status, OrderStatus::Pending);

    let expected_prefix = format!("SO-{}-", order.placed_at.format("%Y%m%d"));
    assert_eq!(order.order_number, format!("{}0001", expected_prefix));

    let lines: Vec<OrderLine> = serde_json::from_value(order.items.clone()).unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].product_id, product.id);
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(lines[0].unit_price_cents, 1200);

    let stocked = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stocked.stock, 3);

    let converted = entity::prelude::Cart::find_by_id(cart.cart.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(converted.status, CartStatus::Converted);
    assert_eq!(converted.owner_key, None);

    Ok(())
}

/// Tests that checkout refuses when there is nothing to order.
///
/// Expected: Err(EmptyCart) both with no cart and with an empty one
#[tokio::test]
async fn empty_cart_cannot_be_placed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let cart_service = CartService::new(db, CartConfig::default());
    let order_service = OrderService::new(db, CartConfig::default());
    let owner = OwnerKey::User(user.id);

    assert!(matches!(
        order_service.place(&owner, Some(&user), no_overrides()).await,
        Err(AppError::CartErr(CartError::EmptyCart))
    ));

    cart_service.get_or_create(&owner).await?;

    assert!(matches!(
        order_service.place(&owner, Some(&user), no_overrides()).await,
        Err(AppError::CartErr(CartError::EmptyCart))
    ));

    Ok(())
}

/// Tests placement atomicity when one line lost the race for stock.
///
/// Two products are carted while stock suffices; the second is then depleted
/// behind the cart's back. Placement must fail and roll back completely: the
/// first product's stock untouched, no order row, cart still active.
///
/// Expected: Err(InsufficientStock) with nothing committed
#[tokio::test]
async fn depleted_line_aborts_whole_placement() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let first = factory::product::ProductFactory::new(db)
        .stock(10)
        .build()
        .await?;
    let second = factory::product::ProductFactory::new(db)
        .stock(10)
        .build()
        .await?;

    let cart_service = CartService::new(db, CartConfig::default());
    let order_service = OrderService::new(db, CartConfig::default());
    let owner = OwnerKey::User(user.id);

    cart_service.add_item(&owner, first.id, 2).await?;
    let cart = cart_service.add_item(&owner, second.id, 4).await?;

    // Concurrent depletion between the advisory check and checkout.
    set_stock(db, second.id, 1).await?;

    match order_service
        .place(&owner, Some(&user), no_overrides())
        .await
        .unwrap_err()
    {
        AppError::CartErr(CartError::InsufficientStock {
            available_stock,
            current_in_cart,
        }) => {
            assert_eq!(available_stock, 1);
            assert_eq!(current_in_cart, Some(4));
        }
        e => panic!("Expected InsufficientStock, got: {:?}", e),
    }

    let first_after = entity::prelude::Product::find_by_id(first.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(first_after.stock, 10);

    let orders = entity::prelude::Order::find().count(db).await?;
    assert_eq!(orders, 0);

    let still_active = entity::prelude::Cart::find_by_id(cart.cart.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(still_active.status, CartStatus::Active);

    Ok(())
}

/// Tests that order numbers within one day are issued sequentially.
///
/// Expected: Ok with suffixes 0001 and 0002 under the same date prefix
#[tokio::test]
async fn order_numbers_increment_within_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let buyer_one = factory::user::create_user(db).await?;
    let buyer_two = factory::user::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .stock(10)
        .build()
        .await?;

    let cart_service = CartService::new(db, CartConfig::default());
    let order_service = OrderService::new(db, CartConfig::default());

    cart_service
        .add_item(&OwnerKey::User(buyer_one.id), product.id, 1)
        .await?;
    cart_service
        .add_item(&OwnerKey::User(buyer_two.id), product.id, 1)
        .await?;

    let first = order_service
        .place(&OwnerKey::User(buyer_one.id), Some(&buyer_one), no_overrides())
        .await?;
    let second = order_service
        .place(&OwnerKey::User(buyer_two.id), Some(&buyer_two), no_overrides())
        .await?;

    assert!(first.order_number.ends_with("-0001"));
    assert!(second.order_number.ends_with("-0002"));
    assert_eq!(
        first.order_number[..12],
        second.order_number[..12],
        "both orders should share the same date prefix"
    );

    Ok(())
}

/// Tests that anonymous checkout requires explicit contact details, and uses
/// them when given.
///
/// Expected: Err(BadRequest) without details, Ok with them
#[tokio::test]
async fn anonymous_checkout_requires_contact_details() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(10)
        .build()
        .await?;

    let cart_service = CartService::new(db, CartConfig::default());
    let order_service = OrderService::new(db, CartConfig::default());
    let owner = OwnerKey::Session("guest".to_string());

    cart_service.add_item(&owner, product.id, 1).await?;

    assert!(matches!(
        order_service.place(&owner, None, no_overrides()).await,
        Err(AppError::BadRequest(_))
    ));

    let placed = order_service
        .place(
            &owner,
            None,
            PlaceOrderParams {
                customer_name: Some("Guest Buyer".to_string()),
                customer_email: Some("guest@example.com".to_string()),
                shipping_address: None,
            },
        )
        .await?;

    assert_eq!(placed.user_id, None);
    assert_eq!(placed.customer_name, "Guest Buyer");
    assert_eq!(placed.customer_email, "guest@example.com");

    Ok(())
}
