use super::*;

/// Tests adding a second primary image.
///
/// Expected: only the newest image is primary, positions keep counting
#[tokio::test]
async fn new_primary_replaces_previous() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;

    let service = VehicleService::new(db);
    let first = service
        .add_image(
            &owner.external_id,
            vehicle.id,
            AddVehicleImageDto {
                image_url: "https://img.example/a.jpg".to_string(),
                is_primary: true,
            },
        )
        .await?;
    let second = service
        .add_image(
            &owner.external_id,
            vehicle.id,
            AddVehicleImageDto {
                image_url: "https://img.example/b.jpg".to_string(),
                is_primary: true,
            },
        )
        .await?;

    assert_eq!(first.position, 0);
    assert_eq!(second.position, 1);

    let detail = service.get_by_id(vehicle.id).await?;
    let primary: Vec<i32> = detail
        .images
        .iter()
        .filter(|i| i.is_primary)
        .map(|i| i.id)
        .collect();
    assert_eq!(primary, vec![second.id]);

    Ok(())
}

/// Tests removing an image of someone else's vehicle, then a missing image.
///
/// Expected: Forbidden, then NotFound "Image not found"
#[tokio::test]
async fn remove_image_checks_owner_and_existence() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;

    let service = VehicleService::new(db);
    let image = service
        .add_image(
            &owner.external_id,
            vehicle.id,
            AddVehicleImageDto {
                image_url: "https://img.example/a.jpg".to_string(),
                is_primary: false,
            },
        )
        .await?;

    let result = service.remove_image(&other.external_id, image.id).await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    service.remove_image(&owner.external_id, image.id).await?;
    let result = service.remove_image(&owner.external_id, image.id).await;
    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Image not found"));

    Ok(())
}
