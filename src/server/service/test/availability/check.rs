use super::*;

/// Tests a range with no blocks or bookings.
///
/// Expected: available
#[tokio::test]
async fn open_range_is_available() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;

    let check = AvailabilityService::new(db)
        .check(vehicle.id, date(7, 1), date(7, 5))
        .await?;

    assert!(check.is_available());

    Ok(())
}

/// Tests a range touching a blocked day and a confirmed booking.
///
/// Expected: both reported, ranges sharing one day count as overlapping
#[tokio::test]
async fn reports_blocks_and_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    factory::availability::create_blocked_date(db, vehicle.id, date(7, 2)).await?;
    let booked = factory::reservation::ReservationFactory::new(db, &vehicle, &renter.external_id)
        .dates(date(7, 5), date(7, 8))
        .status(ReservationStatus::Confirmed)
        .build()
        .await?;

    let check = AvailabilityService::new(db)
        .check(vehicle.id, date(7, 1), date(7, 5))
        .await?;

    assert!(!check.is_available());
    assert_eq!(check.blocked_dates, vec![date(7, 2)]);
    assert_eq!(check.conflicting_reservations.len(), 1);
    assert_eq!(check.conflicting_reservations[0].id, booked.id);

    Ok(())
}

/// Tests that cancelled bookings do not hold the dates.
///
/// Expected: available
#[tokio::test]
async fn ignores_cancelled_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    factory::reservation::ReservationFactory::new(db, &vehicle, &renter.external_id)
        .dates(date(7, 1), date(7, 3))
        .status(ReservationStatus::Cancelled)
        .build()
        .await?;

    let check = AvailabilityService::new(db)
        .check(vehicle.id, date(7, 1), date(7, 3))
        .await?;

    assert!(check.is_available());

    Ok(())
}

/// Tests the month view with a blocked day and a booking crossing into the next month.
///
/// Expected: both included, range spans the whole month
#[tokio::test]
async fn calendar_covers_month() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    factory::availability::create_blocked_date(db, vehicle.id, date(2, 14)).await?;
    factory::availability::create_blocked_date(db, vehicle.id, date(3, 14)).await?;
    factory::reservation::ReservationFactory::new(db, &vehicle, &renter.external_id)
        .dates(date(2, 27), date(3, 2))
        .build()
        .await?;

    let calendar = AvailabilityService::new(db)
        .calendar(vehicle.id, 2030, 2)
        .await?;

    assert_eq!(calendar.range.start, date(2, 1));
    assert_eq!(calendar.range.end, date(2, 28));
    assert_eq!(calendar.availability.len(), 1);
    assert_eq!(calendar.reservations.len(), 1);

    Ok(())
}

/// Tests month 13.
///
/// Expected: BadRequest "Invalid month"
#[tokio::test]
async fn calendar_rejects_invalid_month() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AvailabilityService::new(db).calendar(1, 2030, 13).await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Invalid month"));

    Ok(())
}
