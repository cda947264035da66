use super::*;

/// Tests detecting when an admin user exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(UpsertUserParam {
        external_id: "admin".to_string(),
        name: "Admin".to_string(),
        is_admin: Some(true),
        ..Default::default()
    })
    .await?;

    assert!(repo.admin_exists().await?);

    Ok(())
}

/// Tests detecting when only regular users exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_regular_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(UpsertUserParam {
        external_id: "user_1".to_string(),
        name: "Driver".to_string(),
        is_admin: Some(false),
        ..Default::default()
    })
    .await?;

    assert!(!repo.admin_exists().await?);

    Ok(())
}
