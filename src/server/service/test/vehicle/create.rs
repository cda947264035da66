use super::*;

/// Tests listing a new vehicle with two images.
///
/// Expected: active, unapproved vehicle whose first image is primary
#[tokio::test]
async fn creates_unapproved_vehicle_with_images() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let track = factory::create_track(db).await?;

    let service = VehicleService::new(db);
    let vehicle = service.create(&owner.external_id, new_vehicle(track.id)).await?;

    assert!(vehicle.is_active);
    assert!(!vehicle.is_approved);
    assert_eq!(vehicle.owner_id, owner.external_id);

    let detail = service.get_by_id(vehicle.id).await?;
    assert_eq!(detail.images.len(), 2);
    let primary: Vec<_> = detail.images.iter().filter(|i| i.is_primary).collect();
    assert_eq!(primary.len(), 1);
    assert_eq!(primary[0].image_url, "https://img.example/front.jpg");
    assert_eq!(detail.track.map(|t| t.id), Some(track.id));

    Ok(())
}

/// Tests a daily rate of zero.
///
/// Expected: BadRequest "Daily rate must be positive"
#[tokio::test]
async fn rejects_non_positive_rate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let track = factory::create_track(db).await?;

    let mut vehicle = new_vehicle(track.id);
    vehicle.daily_rate = 0;
    let result = VehicleService::new(db)
        .create(&owner.external_id, vehicle)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Daily rate must be positive"));

    Ok(())
}

/// Tests listing a vehicle at a track that does not exist.
///
/// Expected: NotFound "Track not found"
#[tokio::test]
async fn rejects_unknown_track() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let result = VehicleService::new(db)
        .create(&owner.external_id, new_vehicle(999))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Track not found"));

    Ok(())
}

/// Tests that a new listing stays out of public browsing until approved.
///
/// Expected: absent from list, present in the owner's list
#[tokio::test]
async fn hides_unapproved_from_public_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let track = factory::create_track(db).await?;

    let service = VehicleService::new(db);
    let vehicle = service.create(&owner.external_id, new_vehicle(track.id)).await?;

    assert!(service.list(None, None).await?.is_empty());
    let mine = service.list_by_owner(&owner.external_id).await?;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].vehicle.id, vehicle.id);
    assert_eq!(
        mine[0].primary_image.as_deref(),
        Some("https://img.example/front.jpg")
    );

    Ok(())
}
