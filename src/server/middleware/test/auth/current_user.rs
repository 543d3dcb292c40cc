use super::*;

/// Tests the optional lookup on an anonymous session.
///
/// Expected: Ok(None), not an error
#[tokio::test]
async fn none_for_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session);

    assert!(guard.current_user().await?.is_none());

    Ok(())
}

/// Tests the optional lookup for a logged-in session.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn returns_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    session.insert(SESSION_AUTH_USER_ID, user.id).await?;

    let guard = AuthGuard::new(db, session);
    let current = guard.current_user().await?;

    assert_eq!(current.unwrap().id, user.id);

    Ok(())
}
