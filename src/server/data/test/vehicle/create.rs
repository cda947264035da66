use super::*;

fn params(owner_id: &str, track_id: i32, images: Vec<String>) -> CreateVehicleParams {
    CreateVehicleParams {
        owner_id: owner_id.to_string(),
        track_id,
        make: "Ferrari".to_string(),
        model: "488 Challenge".to_string(),
        year: 2019,
        daily_rate: 120_000,
        description: "Challenge trim".to_string(),
        horsepower: Some(670),
        transmission: None,
        drivetrain: None,
        engine_type: None,
        mileage: None,
        amenities: vec!["Data logger".to_string()],
        add_ons: Vec::new(),
        images,
    }
}

/// Tests that a new listing starts active and awaiting approval.
///
/// Expected: is_active true, is_approved false, amenities stored
#[tokio::test]
async fn creates_unapproved_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let track = factory::create_track(db).await?;

    let vehicle = VehicleRepository::new(db)
        .create(params(&owner.external_id, track.id, Vec::new()))
        .await?;

    assert!(vehicle.is_active);
    assert!(!vehicle.is_approved);
    assert_eq!(vehicle.amenities.0, vec!["Data logger".to_string()]);

    Ok(())
}

/// Tests that images are stored in order with the first one primary.
///
/// Expected: two images, positions 0 and 1, only the first primary
#[tokio::test]
async fn first_image_is_primary() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let track = factory::create_track(db).await?;

    let vehicle = VehicleRepository::new(db)
        .create(params(
            &owner.external_id,
            track.id,
            vec!["https://img/a.jpg".to_string(), "https://img/b.jpg".to_string()],
        ))
        .await?;

    let images = VehicleImageRepository::new(db)
        .list_by_vehicle(vehicle.id)
        .await?;

    assert_eq!(images.len(), 2);
    assert_eq!(images[0].image_url, "https://img/a.jpg");
    assert!(images[0].is_primary);
    assert_eq!(images[1].position, 1);
    assert!(!images[1].is_primary);

    Ok(())
}
