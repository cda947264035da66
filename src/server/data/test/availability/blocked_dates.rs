use super::*;

/// Tests that only unavailable dates inside the range are returned.
///
/// Expected: the blocked date inside the range, nothing else
#[tokio::test]
async fn returns_blocked_dates_in_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) =
        factory::helpers::create_vehicle_with_dependencies(db).await?;

    factory::availability::create_blocked_date(db, vehicle.id, date(2)).await?;
    factory::availability::create_availability(db, vehicle.id, date(3), true).await?;
    factory::availability::create_blocked_date(db, vehicle.id, date(20)).await?;

    let range = DateRange::new(date(1), date(5)).unwrap();
    let blocked = AvailabilityRepository::new(db)
        .blocked_dates(vehicle.id, range)
        .await?;

    assert_eq!(blocked, vec![date(2)]);

    Ok(())
}

/// Tests that range bounds are inclusive.
///
/// Expected: blocked dates on both endpoints are returned
#[tokio::test]
async fn includes_range_endpoints() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) =
        factory::helpers::create_vehicle_with_dependencies(db).await?;

    factory::availability::create_blocked_date(db, vehicle.id, date(1)).await?;
    factory::availability::create_blocked_date(db, vehicle.id, date(5)).await?;

    let range = DateRange::new(date(1), date(5)).unwrap();
    let blocked = AvailabilityRepository::new(db)
        .blocked_dates(vehicle.id, range)
        .await?;

    assert_eq!(blocked, vec![date(1), date(5)]);

    Ok(())
}
