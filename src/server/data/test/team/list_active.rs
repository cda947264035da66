use super::*;

/// Tests filtering teams by location substring, case-insensitively.
///
/// Expected: only the Sonoma team
#[tokio::test]
async fn filters_by_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let sonoma = factory::team::create_team(db, &owner.external_id).await?;
    factory::team::TeamFactory::new(db, &owner.external_id)
        .location("Austin, TX")
        .build()
        .await?;

    let teams = TeamRepository::new(db)
        .list_active(TeamFilter {
            location: Some("sonoma".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, sonoma.id);

    Ok(())
}

/// Tests the seat and specialty filters.
///
/// Expected: only teams with enough seats listing a requested specialty
#[tokio::test]
async fn filters_by_seats_and_specialties() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let matching = factory::team::TeamFactory::new(db, &owner.external_id)
        .specialties(&["Prototype", "GT4"])
        .available_seats(3)
        .build()
        .await?;
    factory::team::TeamFactory::new(db, &owner.external_id)
        .specialties(&["GT4"])
        .available_seats(1)
        .build()
        .await?;
    factory::team::TeamFactory::new(db, &owner.external_id)
        .specialties(&["Rally"])
        .available_seats(4)
        .build()
        .await?;

    let teams = TeamRepository::new(db)
        .list_active(TeamFilter {
            min_seats: Some(2),
            specialties: Some("GT4, Prototype".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, matching.id);

    Ok(())
}

/// Tests that deleting a team removes it from the directory.
///
/// Expected: empty list
#[tokio::test]
async fn deleted_team_is_gone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_motorsports_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let team = factory::team::create_team(db, &owner.external_id).await?;

    let repo = TeamRepository::new(db);
    repo.delete(team.id).await?;

    assert!(repo.list_active(TeamFilter::default()).await?.is_empty());

    Ok(())
}
