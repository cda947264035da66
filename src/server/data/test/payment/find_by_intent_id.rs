use super::*;

/// Tests looking a payment up by the processor's intent id.
///
/// Expected: matching payment found, unknown id returns None
#[tokio::test]
async fn finds_by_intent_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Pending)
            .await?;
    let payment = factory::payment::PaymentFactory::new(db, &reservation)
        .intent_id("pi_known")
        .build()
        .await?;

    let repo = PaymentRepository::new(db);

    assert_eq!(
        repo.find_by_intent_id("pi_known").await?.map(|p| p.id),
        Some(payment.id)
    );
    assert!(repo.find_by_intent_id("pi_unknown").await?.is_none());

    Ok(())
}

/// Tests that both parties see the payment in their history.
///
/// Expected: one payment for the renter and one for the owner
#[tokio::test]
async fn lists_for_both_parties() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Pending)
            .await?;
    factory::payment::PaymentFactory::new(db, &reservation)
        .build()
        .await?;

    let repo = PaymentRepository::new(db);

    assert_eq!(repo.list_for_user(&renter.external_id).await?.len(), 1);
    assert_eq!(repo.list_for_user(&owner.external_id).await?.len(), 1);

    Ok(())
}
