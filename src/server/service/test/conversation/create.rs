use super::*;

/// Tests opening a conversation twice for the same vehicle and parties.
///
/// Expected: the second call returns the first conversation
#[tokio::test]
async fn returns_existing_conversation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;

    let service = ConversationService::new(db);
    let first = service
        .create(&renter.external_id, vehicle.id, &renter.external_id, &owner.external_id)
        .await?;
    let second = service
        .create(&owner.external_id, vehicle.id, &renter.external_id, &owner.external_id)
        .await?;

    assert_eq!(first.id, second.id);

    Ok(())
}

/// Tests opening a conversation between two other users.
///
/// Expected: Forbidden
#[tokio::test]
async fn rejects_outsider() -> Result<(), AppError> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;

    let result = ConversationService::new(db)
        .create(&outsider.external_id, vehicle.id, &renter.external_id, &owner.external_id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests that marking a conversation read clears only the reader's counter.
///
/// Expected: owner unread 0, renter's messages from the owner untouched
#[tokio::test]
async fn mark_read_resets_reader_counter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let conversation =
        factory::create_conversation(db, &vehicle, &renter.external_id).await?;
    let message = factory::message::create_message(db, conversation.id, &renter.external_id).await?;

    let repo = ConversationRepository::new(db);
    let conversation = repo.record_message(conversation, Party::Renter, &message).await?;
    assert_eq!(conversation.unread_count_owner, 1);

    ConversationService::new(db)
        .mark_read(&owner.external_id, conversation.id)
        .await?;

    let conversation = repo.find_by_id(conversation.id).await?.unwrap();
    assert_eq!(conversation.unread_count_owner, 0);
    assert_eq!(conversation.unread_count_renter, 0);

    Ok(())
}

/// Tests reading a conversation the caller is not part of.
///
/// Expected: Forbidden
#[tokio::test]
async fn get_by_id_requires_participant() -> Result<(), AppError> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let conversation =
        factory::create_conversation(db, &vehicle, &renter.external_id).await?;

    let result = ConversationService::new(db)
        .get_by_id(&outsider.external_id, conversation.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}
