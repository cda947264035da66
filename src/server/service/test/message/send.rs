use super::*;

/// Tests sending a first message with only the vehicle and parties.
///
/// Expected: conversation opened with the message as its latest and owner unread 1
#[tokio::test]
async fn opens_conversation_on_first_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;

    let message = MessageService::new(db)
        .send(
            &renter.external_id,
            SendMessageDto {
                vehicle_id: Some(vehicle.id),
                renter_id: Some(renter.external_id.clone()),
                owner_id: Some(owner.external_id.clone()),
                ..text(None, "Is it free in June?")
            },
        )
        .await?;

    let conversation = ConversationRepository::new(db)
        .find_by_id(message.conversation_id)
        .await?
        .unwrap();
    assert_eq!(conversation.last_message_text.as_deref(), Some("Is it free in June?"));
    assert_eq!(conversation.unread_count_owner, 1);
    assert_eq!(conversation.unread_count_renter, 0);

    Ok(())
}

/// Tests sending without a conversation and without every party id.
///
/// Expected: BadRequest "Missing required fields to create conversation"
#[tokio::test]
async fn rejects_incomplete_new_conversation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;

    let result = MessageService::new(db)
        .send(
            &renter.external_id,
            SendMessageDto {
                vehicle_id: Some(vehicle.id),
                ..text(None, "Hello")
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Missing required fields to create conversation"));

    Ok(())
}

/// Tests sending blank content.
///
/// Expected: BadRequest
#[tokio::test]
async fn rejects_empty_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let conversation =
        factory::create_conversation(db, &vehicle, &renter.external_id).await?;

    let result = MessageService::new(db)
        .send(&renter.external_id, text(Some(conversation.id), "   "))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that only the host may post system messages.
///
/// Expected: Forbidden for the renter, Ok for the owner
#[tokio::test]
async fn system_messages_come_from_host() -> Result<(), AppError> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let conversation =
        factory::create_conversation(db, &vehicle, &renter.external_id).await?;

    let service = MessageService::new(db);
    let result = service
        .send_system_message(&renter.external_id, conversation.id, "Keys ready".to_string())
        .await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    service
        .send_system_message(&owner.external_id, conversation.id, "Keys ready".to_string())
        .await?;

    Ok(())
}

/// Tests editing a message after the edit window closed.
///
/// Expected: BadRequest "Messages can only be edited within 15 minutes"
#[tokio::test]
async fn rejects_late_edit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let conversation =
        factory::create_conversation(db, &vehicle, &renter.external_id).await?;
    let message = factory::message::MessageFactory::new(db, conversation.id, &renter.external_id)
        .created_at(Utc::now() - Duration::minutes(20))
        .build()
        .await?;

    let result = MessageService::new(db)
        .edit(&renter.external_id, message.id, "Edited".to_string())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Messages can only be edited within 15 minutes"));

    Ok(())
}

/// Tests editing another user's message.
///
/// Expected: Forbidden
#[tokio::test]
async fn only_sender_edits() -> Result<(), AppError> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let conversation =
        factory::create_conversation(db, &vehicle, &renter.external_id).await?;
    let message =
        factory::message::create_message(db, conversation.id, &renter.external_id).await?;

    let result = MessageService::new(db)
        .edit(&owner.external_id, message.id, "Edited".to_string())
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}
