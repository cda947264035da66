use super::*;

/// Tests adding, finding, counting and removing a favorite.
///
/// Expected: count follows the adds and removes
#[tokio::test]
async fn create_find_and_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) =
        factory::helpers::create_vehicle_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    assert!(repo.find(&user.external_id, vehicle.id).await?.is_none());

    let favorite = repo.create(&user.external_id, vehicle.id).await?;
    assert_eq!(repo.count_by_user(&user.external_id).await?, 1);
    assert_eq!(
        repo.find(&user.external_id, vehicle.id).await?.map(|f| f.id),
        Some(favorite.id)
    );

    repo.delete(favorite.id).await?;
    assert_eq!(repo.count_by_user(&user.external_id).await?, 0);

    Ok(())
}

/// Tests that favorites are scoped to the user.
///
/// Expected: other user's list is empty
#[tokio::test]
async fn scoped_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) =
        factory::helpers::create_vehicle_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.create(&user.external_id, vehicle.id).await?;

    assert_eq!(repo.list_by_user(&user.external_id).await?.len(), 1);
    assert!(repo.list_by_user(&other.external_id).await?.is_empty());

    Ok(())
}
