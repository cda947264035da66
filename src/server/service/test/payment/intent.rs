use super::*;

/// Tests starting payment of a pending reservation with default fees.
///
/// Expected: pending payment with a 5% fee and the reservation linked to it
#[tokio::test]
async fn creates_pending_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Pending)
            .await?;
    let gateway = FakeGateway::new();

    let created = PaymentService::new(db, &gateway)
        .create_intent(&renter.external_id, reservation.id)
        .await?;

    let payment = created.payment;
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.amount, reservation.total_amount);
    assert_eq!(
        payment.platform_fee,
        (reservation.total_amount as f64 * 0.05).round() as i64
    );
    assert_eq!(payment.platform_fee + payment.owner_amount, payment.amount);
    assert_eq!(
        created.client_secret,
        format!("{}_secret", payment.stripe_payment_intent_id.clone().unwrap())
    );

    let reservation = ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?
        .unwrap();
    assert_eq!(reservation.payment_id, Some(payment.id));
    assert_eq!(
        reservation.payment_status,
        Some(ReservationPaymentStatus::Pending)
    );

    Ok(())
}

/// Tests paying for someone else's reservation.
///
/// Expected: Forbidden
#[tokio::test]
async fn only_renter_pays() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Pending)
            .await?;
    let gateway = FakeGateway::new();

    let result = PaymentService::new(db, &gateway)
        .create_intent(&owner.external_id, reservation.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests paying for a reservation that is no longer pending.
///
/// Expected: BadRequest "Reservation is not awaiting payment"
#[tokio::test]
async fn rejects_confirmed_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Confirmed)
            .await?;
    let gateway = FakeGateway::new();

    let result = PaymentService::new(db, &gateway)
        .create_intent(&renter.external_id, reservation.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Reservation is not awaiting payment"));

    Ok(())
}

/// Tests confirming after the processor reports success.
///
/// Expected: payment succeeded with a charge and the reservation confirmed and paid
#[tokio::test]
async fn confirm_records_success() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Pending)
            .await?;
    let gateway = FakeGateway::new();
    let service = PaymentService::new(db, &gateway);

    let created = service
        .create_intent(&renter.external_id, reservation.id)
        .await?;
    let intent_id = created.payment.stripe_payment_intent_id.clone().unwrap();
    gateway.set_status(&intent_id, "succeeded", None);

    let payment = service
        .confirm(&renter.external_id, created.payment.id)
        .await?;

    assert_eq!(payment.status, PaymentStatus::Succeeded);
    assert_eq!(payment.stripe_charge_id, Some(format!("ch_{}", intent_id)));

    let reservation = ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?
        .unwrap();
    assert_eq!(reservation.status, ReservationStatus::Confirmed);
    assert_eq!(reservation.payment_status, Some(ReservationPaymentStatus::Paid));

    Ok(())
}

/// Tests confirming after the card was declined.
///
/// Expected: payment failed with the processor's message
#[tokio::test]
async fn confirm_records_failure() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Pending)
            .await?;
    let gateway = FakeGateway::new();
    let service = PaymentService::new(db, &gateway);

    let created = service
        .create_intent(&renter.external_id, reservation.id)
        .await?;
    let intent_id = created.payment.stripe_payment_intent_id.clone().unwrap();
    gateway.set_status(&intent_id, "requires_payment_method", Some("Card declined"));

    let payment = service
        .confirm(&renter.external_id, created.payment.id)
        .await?;

    assert_eq!(payment.status, PaymentStatus::Failed);
    assert_eq!(payment.failure_reason.as_deref(), Some("Card declined"));

    Ok(())
}

/// Tests confirming while the processor is still working on the charge.
///
/// Expected: payment processing and the reservation still pending
#[tokio::test]
async fn confirm_records_processing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Pending)
            .await?;
    let gateway = FakeGateway::new();
    let service = PaymentService::new(db, &gateway);

    let created = service
        .create_intent(&renter.external_id, reservation.id)
        .await?;
    let intent_id = created.payment.stripe_payment_intent_id.clone().unwrap();
    gateway.set_status(&intent_id, "processing", None);

    let payment = service
        .confirm(&renter.external_id, created.payment.id)
        .await?;

    assert_eq!(payment.status, PaymentStatus::Processing);
    assert_eq!(payment.stripe_charge_id, None);

    let reservation = ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?
        .unwrap();
    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert_eq!(
        reservation.payment_status,
        Some(ReservationPaymentStatus::Pending)
    );

    Ok(())
}

/// Tests that settings initialization runs once.
///
/// Expected: the same settings row on the second call
#[tokio::test]
async fn initializes_settings_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = FakeGateway::new();
    let service = PaymentService::new(db, &gateway);

    let first = service.initialize_settings().await?;
    let second = service.initialize_settings().await?;

    assert_eq!(first.id, second.id);
    assert_eq!(first.minimum_platform_fee, 100);

    Ok(())
}
