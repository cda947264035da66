use super::*;

/// Tests creating a profile, then a second one for the same user.
///
/// Expected: first stored with user type driver, second Conflict
#[tokio::test]
async fn one_profile_per_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let service = DriverService::new(db);
    let profile = service.create(&user.external_id, new_profile()).await?;
    let duplicate = service.create(&user.external_id, new_profile()).await;

    assert_eq!(profile.user_id, user.external_id);
    assert!(matches!(duplicate, Err(AppError::Conflict(msg)) if msg == "Driver profile already exists"));
    assert_eq!(
        service.get_by_user(&user.external_id).await?.map(|p| p.id),
        Some(profile.id)
    );

    let user = UserService::new(db)
        .get_by_external_id(&user.external_id)
        .await?;
    assert_eq!(user.and_then(|u| u.user_type), Some(UserType::Driver));

    Ok(())
}

/// Tests the owner updating experience and location.
///
/// Expected: fields replaced
#[tokio::test]
async fn owner_updates_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let profile = factory::driver_profile::create_driver_profile(db, &user.external_id).await?;

    let updated = DriverService::new(db)
        .update(
            &user.external_id,
            profile.id,
            UpdateDriverProfileDto {
                experience: Some(ExperienceLevel::Professional),
                location: Some("Daytona, FL".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.experience, ExperienceLevel::Professional);
    assert_eq!(updated.location, "Daytona, FL");

    Ok(())
}

/// Tests another user editing and deleting the profile.
///
/// Expected: Forbidden "Not authorized to modify this driver profile"
#[tokio::test]
async fn rejects_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let profile = factory::driver_profile::create_driver_profile(db, &user.external_id).await?;

    let service = DriverService::new(db);
    let update = service
        .update(&other.external_id, profile.id, UpdateDriverProfileDto::default())
        .await;
    let delete = service.delete(&other.external_id, profile.id).await;

    assert!(matches!(update, Err(AppError::Forbidden(msg)) if msg == "Not authorized to modify this driver profile"));
    assert!(matches!(delete, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests filtering by experience level through the service.
///
/// Expected: only the matching profile
#[tokio::test]
async fn lists_by_experience() -> Result<(), AppError> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let pro = factory::create_user(db).await?;
    let rookie = factory::create_user(db).await?;
    let expected = factory::driver_profile::DriverProfileFactory::new(db, &pro.external_id)
        .experience(ExperienceLevel::Professional)
        .build()
        .await?;
    factory::driver_profile::DriverProfileFactory::new(db, &rookie.external_id)
        .experience(ExperienceLevel::Beginner)
        .build()
        .await?;

    let drivers = DriverService::new(db)
        .list(crate::server::data::driver_profile::DriverFilter {
            experience: Some(ExperienceLevel::Professional),
            ..Default::default()
        })
        .await?;

    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].id, expected.id);

    Ok(())
}
