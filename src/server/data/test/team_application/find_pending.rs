use super::*;

/// Tests that a pending application is found for the driver and team.
///
/// Expected: the application
#[tokio::test]
async fn finds_pending_application() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let driver = factory::create_user(db).await?;
    let team = factory::team::create_team(db, &owner.external_id).await?;

    let repo = TeamApplicationRepository::new(db);
    let created = repo.create(&driver.external_id, application(team.id)).await?;

    assert_eq!(created.status, ApplicationStatus::Pending);
    assert_eq!(
        repo.find_pending(&driver.external_id, team.id)
            .await?
            .map(|a| a.id),
        Some(created.id)
    );

    Ok(())
}

/// Tests that a withdrawn application no longer counts as pending.
///
/// Expected: None after withdrawal, listed under withdrawn status
#[tokio::test]
async fn withdrawn_is_not_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let driver = factory::create_user(db).await?;
    let team = factory::team::create_team(db, &owner.external_id).await?;

    let repo = TeamApplicationRepository::new(db);
    let created = repo.create(&driver.external_id, application(team.id)).await?;
    repo.update_status(created, ApplicationStatus::Withdrawn)
        .await?;

    assert!(repo
        .find_pending(&driver.external_id, team.id)
        .await?
        .is_none());
    assert_eq!(
        repo.list_by_status(ApplicationStatus::Withdrawn)
            .await?
            .len(),
        1
    );

    Ok(())
}
