use super::*;

/// Tests that a pending reservation overlapping the range is found.
///
/// Expected: the reservation is returned
#[tokio::test]
async fn finds_pending_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _renter, vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Pending)
            .await?;

    let range = DateRange::new(date(6, 2), date(6, 5)).unwrap();
    let found = ReservationRepository::new(db)
        .overlapping(vehicle.id, range)
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, reservation.id);

    Ok(())
}

/// Tests that ranges touching on a single day overlap.
///
/// Expected: a range starting on the reservation's end date conflicts
#[tokio::test]
async fn shared_endpoint_overlaps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _renter, vehicle, _reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Confirmed)
            .await?;

    let range = DateRange::new(date(6, 3), date(6, 4)).unwrap();
    let found = ReservationRepository::new(db)
        .overlapping(vehicle.id, range)
        .await?;

    assert_eq!(found.len(), 1);

    Ok(())
}

/// Tests that declined and cancelled reservations never block dates.
///
/// Expected: empty result
#[tokio::test]
async fn ignores_non_blocking_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, renter, vehicle, _declined) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Declined)
            .await?;
    factory::reservation::ReservationFactory::new(db, &vehicle, &renter.external_id)
        .status(ReservationStatus::Cancelled)
        .build()
        .await?;

    let range = DateRange::new(date(6, 1), date(6, 3)).unwrap();
    let found = ReservationRepository::new(db)
        .overlapping(vehicle.id, range)
        .await?;

    assert!(found.is_empty());

    Ok(())
}

/// Tests that disjoint ranges do not conflict.
///
/// Expected: empty result
#[tokio::test]
async fn ignores_disjoint_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _renter, vehicle, _reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Pending)
            .await?;

    let range = DateRange::new(date(6, 4), date(6, 8)).unwrap();
    let found = ReservationRepository::new(db)
        .overlapping(vehicle.id, range)
        .await?;

    assert!(found.is_empty());

    Ok(())
}
