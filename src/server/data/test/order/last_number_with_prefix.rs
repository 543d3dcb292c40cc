use super::*;

/// Tests that an empty table yields no last number.
///
/// Expected: Ok(None)
#[tokio::test]
async fn none_when_no_orders_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Order)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);

    assert_eq!(repo.last_number_with_prefix("SO-20250804-").await?, None);

    Ok(())
}

/// Tests that the lookup returns the most recently issued number under the
/// prefix and ignores other days.
///
/// Expected: Ok(Some) with the latest same-day number
#[tokio::test]
async fn returns_latest_number_under_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Order)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    repo.create(record("SO-20250803-0042")).await?;
    repo.create(record("SO-20250804-0001")).await?;
    repo.create(record("SO-20250804-0002")).await?;

    assert_eq!(
        repo.last_number_with_prefix("SO-20250804-").await?,
        Some("SO-20250804-0002".to_string())
    );
    assert_eq!(
        repo.last_number_with_prefix("SO-20250803-").await?,
        Some("SO-20250803-0042".to_string())
    );
    assert_eq!(repo.last_number_with_prefix("SO-20250805-").await?, None);

    Ok(())
}
