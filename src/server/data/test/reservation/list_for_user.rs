use super::*;

/// Tests that the renter and owner each see the reservation from their own side.
///
/// Expected: renter sees it as renter, owner as owner, neither from the other side
#[tokio::test]
async fn lists_by_party() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Pending)
            .await?;

    let repo = ReservationRepository::new(db);

    let as_renter = repo.list_for_user(&renter.external_id, Party::Renter, None).await?;
    assert_eq!(as_renter.len(), 1);
    assert_eq!(as_renter[0].id, reservation.id);

    let as_owner = repo.list_for_user(&owner.external_id, Party::Owner, None).await?;
    assert_eq!(as_owner.len(), 1);

    assert!(repo
        .list_for_user(&renter.external_id, Party::Owner, None)
        .await?
        .is_empty());
    assert!(repo
        .list_for_user(&owner.external_id, Party::Renter, None)
        .await?
        .is_empty());

    Ok(())
}

/// Tests filtering by status.
///
/// Expected: only the confirmed reservation
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, renter, vehicle, _pending) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Pending)
            .await?;
    let confirmed =
        factory::reservation::ReservationFactory::new(db, &vehicle, &renter.external_id)
            .dates(date(7, 1), date(7, 2))
            .status(ReservationStatus::Confirmed)
            .build()
            .await?;

    let found = ReservationRepository::new(db)
        .list_for_user(
            &renter.external_id,
            Party::Renter,
            Some(ReservationStatus::Confirmed),
        )
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, confirmed.id);

    Ok(())
}
