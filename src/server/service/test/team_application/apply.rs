use super::*;

/// Tests a driver applying to another user's team.
///
/// Expected: pending application listed for the driver
#[tokio::test]
async fn files_pending_application() -> Result<(), AppError> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let driver = factory::create_user(db).await?;
    let team = factory::team::create_team(db, &owner.external_id).await?;

    let service = TeamApplicationService::new(db);
    let created = service
        .apply(&driver.external_id, application(team.id))
        .await?;

    assert_eq!(created.status, ApplicationStatus::Pending);
    let listed = service.list_by_driver(&driver.external_id).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);

    Ok(())
}

/// Tests applying twice while the first application is pending.
///
/// Expected: Conflict
#[tokio::test]
async fn rejects_duplicate_pending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let driver = factory::create_user(db).await?;
    let team = factory::team::create_team(db, &owner.external_id).await?;

    let service = TeamApplicationService::new(db);
    service
        .apply(&driver.external_id, application(team.id))
        .await?;
    let result = service
        .apply(&driver.external_id, application(team.id))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests applying again after withdrawing.
///
/// Expected: a second application is accepted
#[tokio::test]
async fn reapplies_after_withdrawal() -> Result<(), AppError> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let driver = factory::create_user(db).await?;
    let team = factory::team::create_team(db, &owner.external_id).await?;

    let service = TeamApplicationService::new(db);
    let first = service
        .apply(&driver.external_id, application(team.id))
        .await?;
    service
        .update_status(&driver.external_id, first.id, ApplicationStatus::Withdrawn)
        .await?;

    let second = service
        .apply(&driver.external_id, application(team.id))
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests a team owner applying to their own team.
///
/// Expected: BadRequest "Cannot apply to your own team"
#[tokio::test]
async fn rejects_own_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let team = factory::team::create_team(db, &owner.external_id).await?;

    let result = TeamApplicationService::new(db)
        .apply(&owner.external_id, application(team.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Cannot apply to your own team"));

    Ok(())
}
