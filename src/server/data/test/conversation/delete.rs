use super::*;

/// Tests that deleting a conversation removes its messages too.
///
/// Expected: conversation and messages gone
#[tokio::test]
async fn deletes_messages_with_conversation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) =
        factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let conversation = factory::create_conversation(db, &vehicle, &renter.external_id).await?;
    let message =
        factory::message::create_message(db, conversation.id, &renter.external_id).await?;

    ConversationRepository::new(db).delete(conversation.id).await?;

    assert!(ConversationRepository::new(db)
        .find_by_id(conversation.id)
        .await?
        .is_none());
    assert!(MessageRepository::new(db)
        .find_by_id(message.id)
        .await?
        .is_none());

    Ok(())
}
