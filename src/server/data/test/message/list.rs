use super::*;

/// Tests the status and type filters on the staff inbox.
///
/// Expected: Ok with only the matching messages in each case
#[tokio::test]
async fn filters_by_status_and_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let unread = factory::message::create_message(db).await?;
    let request = factory::message::MessageFactory::new(db)
        .kind(MessageKind::ServiceRequest)
        .status(MessageStatus::Read)
        .build()
        .await?;

    let repo = MessageRepository::new(db);

    let everything = repo.list(MessageFilter::default()).await?;
    assert_eq!(everything.len(), 2);

    let new_only = repo
        .list(MessageFilter {
            status: Some(MessageStatus::New),
            kind: None,
        })
        .await?;
    assert_eq!(new_only.len(), 1);
    assert_eq!(new_only[0].id, unread.id);

    let requests_only = repo
        .list(MessageFilter {
            status: None,
            kind: Some(MessageKind::ServiceRequest),
        })
        .await?;
    assert_eq!(requests_only.len(), 1);
    assert_eq!(requests_only[0].id, request.id);

    Ok(())
}

/// Tests the triage status transition.
///
/// Expected: Ok(Some) with the new status persisted; Ok(None) for unknown ids
#[tokio::test]
async fn updates_triage_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let message = factory::message::create_message(db).await?;

    let repo = MessageRepository::new(db);

    let updated = repo
        .update_status(message.id, MessageStatus::Closed)
        .await?
        .unwrap();
    assert_eq!(updated.status, MessageStatus::Closed);

    assert!(repo
        .update_status(message.id + 999, MessageStatus::Read)
        .await?
        .is_none());

    Ok(())
}
