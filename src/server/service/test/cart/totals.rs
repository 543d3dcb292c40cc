use super::*;

/// Tests the subtotal invariant across a mixed mutation sequence.
///
/// After any sequence of add/update/remove, the subtotal must equal the sum
/// of `quantity × unit_price_cents` over the remaining lines, and the total
/// must be subtotal plus floored tax.
///
/// Expected: Ok with totals matching a manual recomputation at each step
#[tokio::test]
async fn subtotal_matches_lines_after_any_sequence() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::product::ProductFactory::new(db)
        .price_cents(750)
        .stock(20)
        .build()
        .await?;
    let second = factory::product::ProductFactory::new(db)
        .price_cents(1999)
        .discount_percent(Some(10))
        .stock(20)
        .build()
        .await?;
    let third = factory::product::ProductFactory::new(db)
        .price_cents(333)
        .stock(20)
        .build()
        .await?;

    let service = CartService::new(db, CartConfig::default());
    let owner = OwnerKey::Session("sequence".to_string());

    let check = |cart: &crate::server::model::cart::CartView| {
        let expected_subtotal: i64 = cart
            .lines
            .iter()
            .map(|line| line.item.quantity as i64 * line.item.unit_price_cents as i64)
            .sum();
        let expected_tax = expected_subtotal * 1500 / 10_000;

        assert_eq!(cart.totals.subtotal_cents, expected_subtotal);
        assert_eq!(cart.totals.tax_cents, expected_tax);
        assert_eq!(cart.totals.total_cents, expected_subtotal + expected_tax);
    };

    let cart = service.add_item(&owner, first.id, 3).await?;
    check(&cart);

    let cart = service.add_item(&owner, second.id, 2).await?;
    check(&cart);

    let second_line_id = cart
        .lines
        .iter()
        .find(|line| line.item.product_id == second.id)
        .unwrap()
        .item
        .id;

    let cart = service.add_item(&owner, third.id, 5).await?;
    check(&cart);

    let cart = service.update_item(&owner, second_line_id, 7).await?;
    check(&cart);

    let cart = service.remove_item(&owner, second_line_id).await?;
    check(&cart);

    Ok(())
}
