use super::*;

/// Tests toggling a favorite on and off.
///
/// Expected: Added with an id, then Removed without one
#[tokio::test]
async fn toggles_on_and_off() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;

    let service = FavoriteService::new(db);

    let (action, favorite_id) = service.toggle(&user.external_id, vehicle.id).await?;
    assert_eq!(action, ToggleAction::Added);
    assert!(favorite_id.is_some());

    let (action, favorite_id) = service.toggle(&user.external_id, vehicle.id).await?;
    assert_eq!(action, ToggleAction::Removed);
    assert_eq!(favorite_id, None);
    assert_eq!(service.count(&user.external_id).await?, 0);

    Ok(())
}
