use super::*;

/// Tests an owner changing the rate and description.
///
/// Expected: changed fields updated, others kept
#[tokio::test]
async fn owner_updates_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;

    let updated = VehicleService::new(db)
        .update(
            &owner.external_id,
            vehicle.id,
            UpdateVehicleDto {
                daily_rate: Some(65_000),
                description: Some("Fresh brakes".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.daily_rate, 65_000);
    assert_eq!(updated.description, "Fresh brakes");
    assert_eq!(updated.make, vehicle.make);

    Ok(())
}

/// Tests another user editing the listing.
///
/// Expected: Forbidden "Not authorized to modify this vehicle"
#[tokio::test]
async fn rejects_non_owner_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;

    let result = VehicleService::new(db)
        .update(
            &other.external_id,
            vehicle.id,
            UpdateVehicleDto {
                daily_rate: Some(1),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(msg)) if msg == "Not authorized to modify this vehicle"));

    Ok(())
}

/// Tests lowering the rate to a negative value.
///
/// Expected: BadRequest "Daily rate must be positive"
#[tokio::test]
async fn rejects_negative_rate_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;

    let result = VehicleService::new(db)
        .update(
            &owner.external_id,
            vehicle.id,
            UpdateVehicleDto {
                daily_rate: Some(-100),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Daily rate must be positive"));

    Ok(())
}

/// Tests that removing a listing hides it from the detail page.
///
/// Expected: NotFound "Vehicle not found" after remove
#[tokio::test]
async fn removed_vehicle_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;

    let service = VehicleService::new(db);
    assert_eq!(service.get_by_id(vehicle.id).await?.vehicle.id, vehicle.id);

    service.remove(&owner.external_id, vehicle.id).await?;
    let result = service.get_by_id(vehicle.id).await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Vehicle not found"));
    assert!(service.list_by_owner(&owner.external_id).await?.is_empty());

    Ok(())
}
