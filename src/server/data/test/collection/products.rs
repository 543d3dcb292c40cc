use super::*;

/// Tests replace-all product assignment with list-order positions.
///
/// Reassigning overwrites the previous membership entirely, and the loaded
/// products come back in the order the ids were given.
///
/// Expected: Ok with membership matching the latest assignment
#[tokio::test]
async fn replaces_products_with_positions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let collection = factory::collection::create_collection(db).await?;
    let first = factory::product::create_product(db).await?;
    let second = factory::product::create_product(db).await?;
    let third = factory::product::create_product(db).await?;

    let repo = CollectionRepository::new(db);

    repo.replace_products(collection.id, &[first.id, second.id])
        .await?;
    repo.replace_products(collection.id, &[third.id, first.id])
        .await?;

    let assigned = repo.assigned_products(collection.id).await?;
    assert_eq!(
        assigned.iter().map(|product| product.id).collect::<Vec<_>>(),
        vec![third.id, first.id]
    );

    let rows = entity::prelude::CollectionProduct::find().count(db).await?;
    assert_eq!(rows, 2);

    Ok(())
}

/// Tests removing one product from a collection.
///
/// Expected: Ok(true) for a member, Ok(false) for a non-member
#[tokio::test]
async fn removes_single_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let collection = factory::collection::create_collection(db).await?;
    let member = factory::product::create_product(db).await?;
    let outsider = factory::product::create_product(db).await?;

    let repo = CollectionRepository::new(db);
    repo.replace_products(collection.id, &[member.id]).await?;

    assert!(repo.remove_product(collection.id, member.id).await?);
    assert!(!repo.remove_product(collection.id, outsider.id).await?);

    let remaining = repo.assigned_products(collection.id).await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Tests clearing a collection by assigning an empty list.
#[tokio::test]
async fn empty_assignment_clears_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let collection = factory::collection::create_collection(db).await?;
    let product = factory::product::create_product(db).await?;

    let repo = CollectionRepository::new(db);
    repo.replace_products(collection.id, &[product.id]).await?;
    repo.replace_products(collection.id, &[]).await?;

    assert!(repo.assigned_products(collection.id).await?.is_empty());

    Ok(())
}
