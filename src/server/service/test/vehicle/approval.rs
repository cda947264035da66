use super::*;

/// Tests approving a pending listing.
///
/// Expected: leaves the pending queue and appears in public browsing
#[tokio::test]
async fn approve_publishes_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let track = factory::create_track(db).await?;

    let service = VehicleService::new(db);
    let vehicle = service.create(&owner.external_id, new_vehicle(track.id)).await?;
    assert_eq!(service.list_pending().await?.len(), 1);

    let approved = service.approve(vehicle.id).await?;

    assert!(approved.is_approved);
    assert!(service.list_pending().await?.is_empty());
    let public = service.list(Some(track.id), None).await?;
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].vehicle.id, vehicle.id);

    Ok(())
}

/// Tests rejecting a pending listing.
///
/// Expected: unapproved and deactivated
#[tokio::test]
async fn reject_deactivates_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let track = factory::create_track(db).await?;

    let service = VehicleService::new(db);
    let vehicle = service.create(&owner.external_id, new_vehicle(track.id)).await?;

    let rejected = service.reject(vehicle.id).await?;

    assert!(!rejected.is_approved);
    assert!(!rejected.is_active);
    assert!(service.list_pending().await?.is_empty());

    Ok(())
}

/// Tests approving a vehicle id that does not exist.
///
/// Expected: NotFound "Vehicle not found"
#[tokio::test]
async fn approve_unknown_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VehicleService::new(db).approve(42).await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Vehicle not found"));

    Ok(())
}
