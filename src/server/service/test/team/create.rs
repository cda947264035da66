use super::*;

/// Tests creating a team as a user who already has a driver profile.
///
/// Expected: team stored, user type becomes both
#[tokio::test]
async fn create_merges_user_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::driver_profile::create_driver_profile(db, &user.external_id).await?;
    let users = UserService::new(db);
    users.take_role(&user.external_id, UserType::Driver).await?;

    let team = TeamService::new(db)
        .create(&user.external_id, new_team("Apex Racing", 2))
        .await?;

    assert_eq!(team.owner_id, user.external_id);
    assert!(team.is_active);
    let user = users.get_by_external_id(&user.external_id).await?;
    assert_eq!(user.and_then(|u| u.user_type), Some(UserType::Both));

    Ok(())
}

/// Tests a blank name and a negative seat count.
///
/// Expected: BadRequest for each
#[tokio::test]
async fn rejects_invalid_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let service = TeamService::new(db);
    let blank = service.create(&user.external_id, new_team("  ", 1)).await;
    let negative = service.create(&user.external_id, new_team("Apex", -1)).await;

    assert!(matches!(blank, Err(AppError::BadRequest(msg)) if msg == "Team name is required"));
    assert!(matches!(negative, Err(AppError::BadRequest(msg)) if msg == "Available seats cannot be negative"));

    Ok(())
}
