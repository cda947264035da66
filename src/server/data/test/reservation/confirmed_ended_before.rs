use super::*;

/// Tests selecting confirmed reservations that have finished.
///
/// Expected: only the confirmed reservation whose end date has passed
#[tokio::test]
async fn returns_finished_confirmed_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, renter, vehicle, finished) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Confirmed)
            .await?;

    // Still running on the cutoff day
    factory::reservation::ReservationFactory::new(db, &vehicle, &renter.external_id)
        .dates(date(6, 4), date(6, 10))
        .status(ReservationStatus::Confirmed)
        .build()
        .await?;
    // Finished but never confirmed
    factory::reservation::ReservationFactory::new(db, &vehicle, &renter.external_id)
        .dates(date(5, 1), date(5, 2))
        .status(ReservationStatus::Pending)
        .build()
        .await?;

    let found = ReservationRepository::new(db)
        .confirmed_ended_before(date(6, 10))
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, finished.id);

    Ok(())
}
