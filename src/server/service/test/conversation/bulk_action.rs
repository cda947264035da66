use super::*;

/// Tests archiving several conversations where one id does not exist.
///
/// Expected: existing ids processed and archived, missing id skipped
#[tokio::test]
async fn archives_and_skips_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let first_renter = factory::create_user(db).await?;
    let second_renter = factory::create_user(db).await?;
    let first = factory::create_conversation(db, &vehicle, &first_renter.external_id).await?;
    let second = factory::create_conversation(db, &vehicle, &second_renter.external_id).await?;

    let processed = ConversationService::new(db)
        .bulk_action(
            &owner.external_id,
            vec![first.id, 9_999, second.id],
            BulkAction::Archive,
        )
        .await?;

    assert_eq!(processed, vec![first.id, second.id]);

    let active = ConversationService::new(db)
        .list_for_user(&owner.external_id, Party::Owner)
        .await?;
    assert!(active.is_empty());

    Ok(())
}

/// Tests a bulk action that names another host's conversation.
///
/// Expected: Forbidden and no change to the host's own conversation
#[tokio::test]
async fn rejects_other_hosts_conversation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let (_other_owner, _other_track, other_vehicle) =
        factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let own = factory::create_conversation(db, &vehicle, &renter.external_id).await?;
    let foreign = factory::create_conversation(db, &other_vehicle, &renter.external_id).await?;

    let result = ConversationService::new(db)
        .bulk_action(&owner.external_id, vec![own.id, foreign.id], BulkAction::Delete)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert!(ConversationRepository::new(db)
        .find_by_id(own.id)
        .await?
        .is_some());

    Ok(())
}
