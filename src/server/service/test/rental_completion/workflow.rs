use super::*;

/// Tests the full return flow from renter form to owner confirmation.
///
/// Expected: completion completed and reservation completed
#[tokio::test]
async fn renter_then_owner_completes_rental() -> Result<(), AppError> {
    let test = TestBuilder::new().with_completion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Confirmed)
            .await?;
    let completion = factory::rental_completion::create_rental_completion(
        db,
        &reservation,
        CompletionStatus::PendingRenter,
    )
    .await?;

    let service = RentalCompletionService::new(db);
    let returned = service
        .submit_renter_return(&renter.external_id, completion.id, renter_return())
        .await?;
    assert_eq!(returned.status, CompletionStatus::PendingOwner);
    assert_eq!(
        returned.renter_return_form.map(|f| f.mileage),
        Some(12_450)
    );

    let closed = service
        .submit_owner_review(&owner.external_id, completion.id, owner_review())
        .await?;
    assert_eq!(closed.status, CompletionStatus::Completed);
    assert!(closed.completed_at.is_some());
    assert_eq!(closed.completion_notes.as_deref(), Some("Clean return"));

    let reservation = ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?
        .unwrap();
    assert_eq!(reservation.status, ReservationStatus::Completed);

    Ok(())
}

/// Tests a second owner confirmation of an already completed rental.
///
/// Expected: BadRequest and the first confirmation left as it was
#[tokio::test]
async fn owner_review_submitted_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_completion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Confirmed)
            .await?;
    let completion = factory::rental_completion::create_rental_completion(
        db,
        &reservation,
        CompletionStatus::PendingOwner,
    )
    .await?;

    let service = RentalCompletionService::new(db);
    service
        .submit_owner_review(&owner.external_id, completion.id, owner_review())
        .await?;

    let mut second = owner_review();
    second.completion_notes = Some("Overwritten".to_string());
    let result = service
        .submit_owner_review(&owner.external_id, completion.id, second)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Rental completion is not awaiting this step"));

    let stored = service
        .get_by_id(&owner.external_id, completion.id)
        .await?
        .completion;
    assert_eq!(stored.status, CompletionStatus::Completed);
    assert_eq!(stored.completion_notes.as_deref(), Some("Clean return"));

    Ok(())
}

/// Tests that the owner cannot confirm before the renter's form.
///
/// Expected: BadRequest
#[tokio::test]
async fn owner_waits_for_renter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_completion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Confirmed)
            .await?;
    let completion = factory::rental_completion::create_rental_completion(
        db,
        &reservation,
        CompletionStatus::PendingRenter,
    )
    .await?;

    let result = RentalCompletionService::new(db)
        .submit_owner_review(&owner.external_id, completion.id, owner_review())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that the owner cannot file the renter's return form.
///
/// Expected: Forbidden
#[tokio::test]
async fn owner_cannot_submit_return_form() -> Result<(), AppError> {
    let test = TestBuilder::new().with_completion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Confirmed)
            .await?;
    let completion = factory::rental_completion::create_rental_completion(
        db,
        &reservation,
        CompletionStatus::PendingRenter,
    )
    .await?;

    let result = RentalCompletionService::new(db)
        .submit_renter_return(&owner.external_id, completion.id, renter_return())
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests that each side only sees the completions waiting on it.
///
/// Expected: renter sees the pending_renter one, owner sees the pending_owner one
#[tokio::test]
async fn pending_for_user_splits_by_side() -> Result<(), AppError> {
    let test = TestBuilder::new().with_completion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, renter, vehicle, first) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Confirmed)
            .await?;
    let second = factory::reservation::ReservationFactory::new(db, &vehicle, &renter.external_id)
        .dates(
            NaiveDate::from_ymd_opt(2030, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2030, 7, 2).unwrap(),
        )
        .status(ReservationStatus::Confirmed)
        .build()
        .await?;
    let awaiting_renter = factory::rental_completion::create_rental_completion(
        db,
        &first,
        CompletionStatus::PendingRenter,
    )
    .await?;
    let awaiting_owner = factory::rental_completion::create_rental_completion(
        db,
        &second,
        CompletionStatus::PendingOwner,
    )
    .await?;

    let service = RentalCompletionService::new(db);
    let renter_pending = service.pending_for_user(&renter.external_id).await?;
    let owner_pending = service.pending_for_user(&owner.external_id).await?;

    assert_eq!(renter_pending.len(), 1);
    assert_eq!(renter_pending[0].id, awaiting_renter.id);
    assert_eq!(owner_pending.len(), 1);
    assert_eq!(owner_pending[0].id, awaiting_owner.id);

    Ok(())
}
