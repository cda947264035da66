use super::*;

/// Tests booking free dates on another owner's vehicle.
///
/// Expected: pending reservation priced at nights times the daily rate
#[tokio::test]
async fn books_free_dates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;

    let reservation = ReservationService::new(db)
        .create(&renter.external_id, booking(vehicle.id, 1, 4))
        .await?;

    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert_eq!(reservation.owner_id, owner.external_id);
    assert_eq!(reservation.total_days, 3);
    assert_eq!(reservation.total_amount, 3 * vehicle.daily_rate);

    Ok(())
}

/// Tests that owners cannot book their own vehicle.
///
/// Expected: BadRequest "Cannot book your own vehicle"
#[tokio::test]
async fn rejects_own_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;

    let result = ReservationService::new(db)
        .create(&owner.external_id, booking(vehicle.id, 1, 4))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Cannot book your own vehicle"));

    Ok(())
}

/// Tests that a same-day range has no nights to charge.
///
/// Expected: BadRequest "Invalid date range"
#[tokio::test]
async fn rejects_zero_nights() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;

    let result = ReservationService::new(db)
        .create(&renter.external_id, booking(vehicle.id, 5, 5))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Invalid date range"));

    Ok(())
}

/// Tests that a blocked date inside the range prevents booking.
///
/// Expected: Conflict "Selected dates are not available"
#[tokio::test]
async fn rejects_blocked_dates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    factory::availability::create_blocked_date(db, vehicle.id, date(3)).await?;

    let result = ReservationService::new(db)
        .create(&renter.external_id, booking(vehicle.id, 1, 4))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(msg)) if msg == "Selected dates are not available"));

    Ok(())
}

/// Tests that an overlapping pending booking prevents a second one.
///
/// Expected: Conflict "Selected dates conflict with existing reservations"
#[tokio::test]
async fn rejects_overlapping_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _renter, vehicle, _existing) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Pending)
            .await?;
    let other = factory::create_user(db).await?;

    let result = ReservationService::new(db)
        .create(&other.external_id, booking(vehicle.id, 3, 6))
        .await;

    assert!(matches!(
        result,
        Err(AppError::Conflict(msg)) if msg == "Selected dates conflict with existing reservations"
    ));

    Ok(())
}

/// Tests that a deactivated vehicle cannot be booked.
///
/// Expected: NotFound
#[tokio::test]
async fn rejects_inactive_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let track = factory::create_track(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, &owner.external_id, track.id)
        .is_active(false)
        .build()
        .await?;
    let renter = factory::create_user(db).await?;

    let result = ReservationService::new(db)
        .create(&renter.external_id, booking(vehicle.id, 1, 4))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
