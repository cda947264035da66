use super::*;

/// Tests updating the phone number of an existing user.
///
/// Expected: phone set, name and email kept
#[tokio::test]
async fn updates_existing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let updated = UserService::new(db)
        .update_profile(
            &user.external_id,
            UpdateProfileDto {
                phone: Some("+1 555 0100".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.phone.as_deref(), Some("+1 555 0100"));
    assert_eq!(updated.name, user.name);
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests updating the profile of a user the identity webhook has not delivered yet.
///
/// Expected: user created from the submitted fields
#[tokio::test]
async fn creates_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserService::new(db)
        .update_profile(
            "user_late",
            UpdateProfileDto {
                name: Some("Late Arrival".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(created.external_id, "user_late");
    assert_eq!(created.name, "Late Arrival");

    Ok(())
}

/// Tests taking the same role twice, then a second role.
///
/// Expected: team, team, both
#[tokio::test]
async fn take_role_merges() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let service = UserService::new(db);
    let mut seen = Vec::new();
    for role in [UserType::Team, UserType::Team, UserType::Driver] {
        service.take_role(&user.external_id, role).await?;
        let current = service.get_by_external_id(&user.external_id).await?;
        seen.push(current.and_then(|u| u.user_type));
    }

    assert_eq!(
        seen,
        vec![Some(UserType::Team), Some(UserType::Team), Some(UserType::Both)]
    );

    Ok(())
}

/// Tests deleting a user the identity provider removed, then again.
///
/// Expected: true, then false
#[tokio::test]
async fn delete_from_identity_reports_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let service = UserService::new(db);

    assert!(service.delete_from_identity(&user.external_id).await?);
    assert!(!service.delete_from_identity(&user.external_id).await?);

    Ok(())
}
