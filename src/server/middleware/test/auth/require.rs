use super::*;

/// Tests that a session without a user id is rejected.
///
/// Expected: Err(AuthError::NotAuthenticated)
#[tokio::test]
async fn rejects_unauthenticated_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotAuthenticated))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_session_for_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    session.insert(SESSION_AUTH_USER_ID, 4242).await?;

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests that an empty permission list admits any authenticated user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_admits_customer() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    session.insert(SESSION_AUTH_USER_ID, user.id).await?;

    let guard = AuthGuard::new(db, session);
    let admitted = guard.require(&[]).await?;

    assert_eq!(admitted.id, user.id);

    Ok(())
}

/// Tests the staff permission across all three roles.
///
/// Expected: Ok for admin and editor, Err(AccessDenied) for customer
#[tokio::test]
async fn staff_permission_admits_admin_and_editor_only() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await?;
    let editor = factory::user::create_editor(db).await?;
    let customer = factory::user::create_user(db).await?;

    let guard = AuthGuard::new(db, session);

    session.insert(SESSION_AUTH_USER_ID, admin.id).await?;
    assert!(guard.require(&[Permission::Staff]).await.is_ok());

    session.insert(SESSION_AUTH_USER_ID, editor.id).await?;
    assert!(guard.require(&[Permission::Staff]).await.is_ok());

    session.insert(SESSION_AUTH_USER_ID, customer.id).await?;
    assert!(matches!(
        guard.require(&[Permission::Staff]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}

/// Tests that the admin permission excludes editors.
///
/// Expected: Ok for admin, Err(AccessDenied) for editor
#[tokio::test]
async fn admin_permission_excludes_editor() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await?;
    let editor = factory::user::create_editor(db).await?;

    let guard = AuthGuard::new(db, session);

    session.insert(SESSION_AUTH_USER_ID, admin.id).await?;
    assert!(guard.require(&[Permission::Admin]).await.is_ok());

    session.insert(SESSION_AUTH_USER_ID, editor.id).await?;
    assert!(matches!(
        guard.require(&[Permission::Admin]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}
