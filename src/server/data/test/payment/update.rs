use super::*;

/// Tests recording a successful charge.
///
/// Expected: status succeeded, charge id stored, other fields untouched
#[tokio::test]
async fn records_success() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Pending)
            .await?;
    let payment = factory::payment::PaymentFactory::new(db, &reservation)
        .build()
        .await?;

    let updated = PaymentRepository::new(db)
        .update(
            payment.clone(),
            PaymentUpdate {
                status: Some(PaymentStatus::Succeeded),
                stripe_charge_id: Some("ch_1".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.status, PaymentStatus::Succeeded);
    assert_eq!(updated.stripe_charge_id.as_deref(), Some("ch_1"));
    assert_eq!(updated.amount, payment.amount);
    assert!(updated.failure_reason.is_none());

    Ok(())
}

/// Tests recording a refund.
///
/// Expected: status refunded with amount and reason
#[tokio::test]
async fn records_refund() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Confirmed)
            .await?;
    let payment = factory::payment::PaymentFactory::new(db, &reservation)
        .status(PaymentStatus::Succeeded)
        .build()
        .await?;

    let updated = PaymentRepository::new(db)
        .update(
            payment,
            PaymentUpdate {
                status: Some(PaymentStatus::Refunded),
                refund_amount: Some(10_000),
                refund_reason: Some("requested_by_customer".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.status, PaymentStatus::Refunded);
    assert_eq!(updated.refund_amount, Some(10_000));
    assert_eq!(updated.refund_reason.as_deref(), Some("requested_by_customer"));

    Ok(())
}
