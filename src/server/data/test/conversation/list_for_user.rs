use super::*;

/// Tests that archived conversations are hidden unless requested.
///
/// Expected: empty without archived, one conversation with archived
#[tokio::test]
async fn hides_archived_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) =
        factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let conversation = factory::create_conversation(db, &vehicle, &renter.external_id).await?;

    let repo = ConversationRepository::new(db);
    repo.set_active(conversation, false).await?;

    assert!(repo
        .list_for_user(&renter.external_id, Party::Renter, false)
        .await?
        .is_empty());
    assert_eq!(
        repo.list_for_user(&renter.external_id, Party::Renter, true)
            .await?
            .len(),
        1
    );

    Ok(())
}

/// Tests lookup of the conversation for a vehicle and its two participants.
///
/// Expected: found for the exact triple, not for another renter
#[tokio::test]
async fn finds_by_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let conversation = factory::create_conversation(db, &vehicle, &renter.external_id).await?;

    let repo = ConversationRepository::new(db);

    let found = repo
        .find(vehicle.id, &renter.external_id, &owner.external_id)
        .await?;
    assert_eq!(found.map(|c| c.id), Some(conversation.id));

    assert!(repo
        .find(vehicle.id, &other.external_id, &owner.external_id)
        .await?
        .is_none());

    Ok(())
}
