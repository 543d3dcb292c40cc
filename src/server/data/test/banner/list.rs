use super::*;

/// Tests position ordering and the active filter.
///
/// Expected: Ok with banners in position order; the inactive one only
/// appears in the unfiltered listing
#[tokio::test]
async fn orders_by_position_and_filters_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Banner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let last = factory::banner::BannerFactory::new(db)
        .position(2)
        .build()
        .await?;
    let first = factory::banner::BannerFactory::new(db)
        .position(0)
        .build()
        .await?;
    let hidden = factory::banner::BannerFactory::new(db)
        .position(1)
        .is_active(false)
        .build()
        .await?;

    let repo = BannerRepository::new(db);

    let all = repo.list(false).await?;
    assert_eq!(
        all.iter().map(|banner| banner.id).collect::<Vec<_>>(),
        vec![first.id, hidden.id, last.id]
    );

    let active = repo.list(true).await?;
    assert_eq!(
        active.iter().map(|banner| banner.id).collect::<Vec<_>>(),
        vec![first.id, last.id]
    );

    Ok(())
}
