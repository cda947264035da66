use super::*;

/// Tests refunding part of a captured payment.
///
/// Expected: payment partially refunded with the amount recorded, reservation untouched
#[tokio::test]
async fn partial_refund_marks_partially_refunded() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Confirmed)
            .await?;
    let payment = factory::payment::PaymentFactory::new(db, &reservation)
        .status(PaymentStatus::Succeeded)
        .charge_id("ch_partial")
        .build()
        .await?;
    let gateway = FakeGateway::new();

    let refunded = PaymentService::new(db, &gateway)
        .refund(&owner.external_id, payment.id, Some(1_000), None)
        .await?;

    assert_eq!(refunded.status, PaymentStatus::PartiallyRefunded);
    assert_eq!(refunded.refund_amount, Some(1_000));
    assert_eq!(gateway.refunds(), vec![("ch_partial".to_string(), Some(1_000))]);

    let reservation = ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?
        .unwrap();
    assert_eq!(reservation.status, ReservationStatus::Confirmed);

    Ok(())
}

/// Tests refunding a payment in two parts that together cover the whole amount.
///
/// Expected: running total recorded, payment refunded and the reservation cancelled
/// after the second part, and any further refund rejected
#[tokio::test]
async fn partial_refunds_accumulate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Confirmed)
            .await?;
    let payment = factory::payment::PaymentFactory::new(db, &reservation)
        .status(PaymentStatus::Succeeded)
        .charge_id("ch_halves")
        .build()
        .await?;
    let gateway = FakeGateway::new();
    let service = PaymentService::new(db, &gateway);
    let half = payment.amount / 2;

    let first = service
        .refund(&owner.external_id, payment.id, Some(half), None)
        .await?;
    assert_eq!(first.status, PaymentStatus::PartiallyRefunded);
    assert_eq!(first.refund_amount, Some(half));

    let second = service
        .refund(&owner.external_id, payment.id, Some(payment.amount - half), None)
        .await?;
    assert_eq!(second.status, PaymentStatus::Refunded);
    assert_eq!(second.refund_amount, Some(payment.amount));

    let reservation = ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?
        .unwrap();
    assert_eq!(reservation.status, ReservationStatus::Cancelled);
    assert_eq!(
        reservation.payment_status,
        Some(ReservationPaymentStatus::Refunded)
    );

    let result = service
        .refund(&owner.external_id, payment.id, Some(1), None)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Payment is already fully refunded"));
    assert_eq!(gateway.refunds().len(), 2);

    Ok(())
}

/// Tests a partial refund larger than what is left of the payment.
///
/// Expected: BadRequest, nothing sent to the processor and the total unchanged
#[tokio::test]
async fn rejects_refund_above_remainder() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Confirmed)
            .await?;
    let payment = factory::payment::PaymentFactory::new(db, &reservation)
        .status(PaymentStatus::Succeeded)
        .charge_id("ch_over")
        .build()
        .await?;
    let gateway = FakeGateway::new();
    let service = PaymentService::new(db, &gateway);
    let half = payment.amount / 2;

    service
        .refund(&owner.external_id, payment.id, Some(half), None)
        .await?;
    let result = service
        .refund(&owner.external_id, payment.id, Some(half + 1_000), None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Invalid refund amount"));
    assert_eq!(gateway.refunds().len(), 1);
    let unchanged = PaymentRepository::new(db)
        .find_by_id(payment.id)
        .await?
        .unwrap();
    assert_eq!(unchanged.refund_amount, Some(half));
    assert_eq!(unchanged.status, PaymentStatus::PartiallyRefunded);

    Ok(())
}

/// Tests refunding a payment the processor never charged.
///
/// Expected: BadRequest "Payment has no charge to refund"
#[tokio::test]
async fn rejects_refund_without_charge() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Pending)
            .await?;
    let payment = factory::payment::PaymentFactory::new(db, &reservation)
        .build()
        .await?;
    let gateway = FakeGateway::new();

    let result = PaymentService::new(db, &gateway)
        .refund(&owner.external_id, payment.id, None, None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Payment has no charge to refund"));
    assert!(gateway.refunds().is_empty());

    Ok(())
}

/// Tests refunding the whole payment.
///
/// Expected: payment refunded and the reservation cancelled
#[tokio::test]
async fn full_refund_cancels_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Confirmed)
            .await?;
    let payment = factory::payment::PaymentFactory::new(db, &reservation)
        .status(PaymentStatus::Succeeded)
        .charge_id("ch_full")
        .build()
        .await?;
    let gateway = FakeGateway::new();

    let refunded = PaymentService::new(db, &gateway)
        .refund(
            &owner.external_id,
            payment.id,
            None,
            Some("Track closed".to_string()),
        )
        .await?;

    assert_eq!(refunded.status, PaymentStatus::Refunded);
    assert_eq!(refunded.refund_amount, Some(payment.amount));
    assert_eq!(refunded.refund_reason.as_deref(), Some("Track closed"));

    let reservation = ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?
        .unwrap();
    assert_eq!(reservation.status, ReservationStatus::Cancelled);
    assert_eq!(
        reservation.payment_status,
        Some(ReservationPaymentStatus::Refunded)
    );

    Ok(())
}

/// Tests refund requests the owner may not make.
///
/// Expected: Forbidden for the renter, BadRequest above the paid amount
#[tokio::test]
async fn rejects_invalid_refunds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Confirmed)
            .await?;
    let payment = factory::payment::PaymentFactory::new(db, &reservation)
        .status(PaymentStatus::Succeeded)
        .charge_id("ch_invalid")
        .build()
        .await?;
    let gateway = FakeGateway::new();
    let service = PaymentService::new(db, &gateway);

    let result = service
        .refund(&renter.external_id, payment.id, None, None)
        .await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    let result = service
        .refund(&owner.external_id, payment.id, Some(payment.amount + 1), None)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    assert!(gateway.refunds().is_empty());
    let unchanged = PaymentRepository::new(db)
        .find_by_id(payment.id)
        .await?
        .unwrap();
    assert_eq!(unchanged.refund_amount, None);

    Ok(())
}
