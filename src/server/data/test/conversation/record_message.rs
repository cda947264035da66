use super::*;

/// Tests that a renter's message updates the preview and bumps the owner's unread count.
///
/// Expected: owner unread 1, renter unread 0, last message fields set
#[tokio::test]
async fn bumps_recipient_unread_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) =
        factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let conversation = factory::create_conversation(db, &vehicle, &renter.external_id).await?;

    let message = MessageRepository::new(db)
        .create(
            conversation.id,
            &renter.external_id,
            "Hello".to_string(),
            MessageType::Text,
        )
        .await?;
    let updated = ConversationRepository::new(db)
        .record_message(conversation, Party::Renter, &message)
        .await?;

    assert_eq!(updated.unread_count_owner, 1);
    assert_eq!(updated.unread_count_renter, 0);
    assert_eq!(updated.last_message_text.as_deref(), Some("Hello"));
    assert_eq!(
        updated.last_message_sender_id.as_deref(),
        Some(renter.external_id.as_str())
    );
    assert_eq!(updated.last_message_at, message.created_at);

    Ok(())
}

/// Tests that resetting clears only the reader's counter.
///
/// Expected: owner unread 0 after reset, renter unread untouched
#[tokio::test]
async fn reset_clears_one_side() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let conversation = factory::create_conversation(db, &vehicle, &renter.external_id).await?;

    let messages = MessageRepository::new(db);
    let repo = ConversationRepository::new(db);

    let from_renter = messages
        .create(conversation.id, &renter.external_id, "Hi".to_string(), MessageType::Text)
        .await?;
    let conversation = repo
        .record_message(conversation, Party::Renter, &from_renter)
        .await?;
    let from_owner = messages
        .create(conversation.id, &owner.external_id, "Hey".to_string(), MessageType::Text)
        .await?;
    let conversation = repo
        .record_message(conversation, Party::Owner, &from_owner)
        .await?;

    let conversation = repo.reset_unread(conversation, Party::Owner).await?;

    assert_eq!(conversation.unread_count_owner, 0);
    assert_eq!(conversation.unread_count_renter, 1);

    Ok(())
}
