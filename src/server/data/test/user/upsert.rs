use super::*;

fn param(external_id: &str, name: &str, is_admin: Option<bool>) -> UpsertUserParam {
    UpsertUserParam {
        external_id: external_id.to_string(),
        name: name.to_string(),
        email: Some(format!("{external_id}@example.com")),
        is_admin,
        ..Default::default()
    }
}

/// Tests creating a new user.
///
/// Expected: Ok with the given fields, not admin, no rating
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.upsert(param("user_1", "Ayrton", None)).await?;

    assert_eq!(user.external_id, "user_1");
    assert_eq!(user.name, "Ayrton");
    assert_eq!(user.email.as_deref(), Some("user_1@example.com"));
    assert!(!user.admin);
    assert!(user.rating.is_none());

    Ok(())
}

/// Tests that a second upsert with the same external id updates the row in place.
///
/// Expected: same primary key, new name
#[tokio::test]
async fn updates_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.upsert(param("user_1", "Ayrton", None)).await?;
    let second = repo.upsert(param("user_1", "Ayrton Senna", None)).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "Ayrton Senna");

    Ok(())
}

/// Tests that an upsert without an admin value keeps an existing admin flag.
///
/// Expected: user remains admin
#[tokio::test]
async fn preserves_admin_when_not_specified() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(param("admin_1", "Admin", Some(true))).await?;
    let user = repo.upsert(param("admin_1", "Admin Renamed", None)).await?;

    assert!(user.admin);
    assert_eq!(user.name, "Admin Renamed");

    Ok(())
}
