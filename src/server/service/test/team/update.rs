use super::*;

/// Tests the owner changing seats and deactivating the team.
///
/// Expected: changes stored, team leaves the public list
#[tokio::test]
async fn owner_updates_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let team = factory::team::create_team(db, &owner.external_id).await?;

    let service = TeamService::new(db);
    let updated = service
        .update(
            &owner.external_id,
            team.id,
            UpdateTeamDto {
                available_seats: Some(0),
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.available_seats, 0);
    assert!(!updated.is_active);
    assert!(service.list(Default::default()).await?.is_empty());
    assert_eq!(service.list_by_owner(&owner.external_id).await?.len(), 1);

    Ok(())
}

/// Tests another user editing and deleting the team.
///
/// Expected: Forbidden "Not authorized to modify this team" for both
#[tokio::test]
async fn rejects_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let team = factory::team::create_team(db, &owner.external_id).await?;

    let service = TeamService::new(db);
    let update = service
        .update(&other.external_id, team.id, UpdateTeamDto::default())
        .await;
    let delete = service.delete(&other.external_id, team.id).await;

    assert!(matches!(update, Err(AppError::Forbidden(msg)) if msg == "Not authorized to modify this team"));
    assert!(matches!(delete, Err(AppError::Forbidden(msg)) if msg == "Not authorized to modify this team"));

    Ok(())
}

/// Tests deleting a team.
///
/// Expected: NotFound "Team not found" afterwards
#[tokio::test]
async fn delete_removes_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let team = factory::team::create_team(db, &owner.external_id).await?;

    let service = TeamService::new(db);
    service.delete(&owner.external_id, team.id).await?;
    let result = service.get_by_id(team.id).await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Team not found"));

    Ok(())
}
