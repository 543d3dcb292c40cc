use super::*;

/// Tests the guarded decrement when enough stock remains.
///
/// Expected: Ok(true) with the counter reduced
#[tokio::test]
async fn decrements_when_stock_suffices() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(10)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    assert!(repo.decrement_stock(product.id, 4).await?);

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.stock, 6);

    Ok(())
}

/// Tests that the decrement refuses rather than going negative.
///
/// The guard is the `stock >= q` predicate in the update itself, so a
/// concurrent depletion shows up as zero affected rows, never as negative
/// stock.
///
/// Expected: Ok(false) with the counter untouched
#[tokio::test]
async fn refuses_when_stock_insufficient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(3)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    assert!(!repo.decrement_stock(product.id, 5).await?);

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.stock, 3);

    Ok(())
}

/// Tests that sequential decrements deplete stock exactly to zero and then
/// start refusing.
///
/// Expected: Ok(true) while stock lasts, Ok(false) once depleted
#[tokio::test]
async fn sequential_decrements_deplete_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(5)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    assert!(repo.decrement_stock(product.id, 3).await?);
    assert!(repo.decrement_stock(product.id, 2).await?);
    assert!(!repo.decrement_stock(product.id, 1).await?);

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.stock, 0);

    Ok(())
}
