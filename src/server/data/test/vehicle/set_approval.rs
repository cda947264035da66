use super::*;

/// Tests approving a pending listing.
///
/// Expected: approved and still active, gone from the pending list
#[tokio::test]
async fn approves_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let track = factory::create_track(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, &owner.external_id, track.id)
        .is_approved(false)
        .build()
        .await?;

    let repo = VehicleRepository::new(db);
    assert_eq!(repo.list_pending_approval().await?.len(), 1);

    let vehicle = repo.set_approval(vehicle, true).await?;

    assert!(vehicle.is_approved);
    assert!(vehicle.is_active);
    assert!(repo.list_pending_approval().await?.is_empty());

    Ok(())
}

/// Tests that rejecting a listing also deactivates it.
///
/// Expected: not approved, not active
#[tokio::test]
async fn rejection_deactivates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vehicle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let track = factory::create_track(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, &owner.external_id, track.id)
        .is_approved(false)
        .build()
        .await?;

    let vehicle = VehicleRepository::new(db)
        .set_approval(vehicle, false)
        .await?;

    assert!(!vehicle.is_approved);
    assert!(!vehicle.is_active);

    Ok(())
}
