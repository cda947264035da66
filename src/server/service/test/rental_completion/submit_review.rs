use super::*;

/// Tests that a renter's review targets the owner and updates their rating.
///
/// Expected: renter_to_owner review, owner rating 4.0
#[tokio::test]
async fn renter_review_rates_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_completion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Completed)
            .await?;
    let completion = factory::rental_completion::create_rental_completion(
        db,
        &reservation,
        CompletionStatus::Completed,
    )
    .await?;

    let created = RentalCompletionService::new(db)
        .submit_review(&renter.external_id, completion.id, review(4))
        .await?;

    assert_eq!(created.review_type, ReviewType::RenterToOwner);
    assert_eq!(created.reviewed_id, owner.external_id);
    assert!(created.is_public);

    let owner = UserRepository::new(db)
        .find_by_external_id(&owner.external_id)
        .await?
        .unwrap();
    assert_eq!(owner.rating, Some(4.0));

    Ok(())
}

/// Tests that a reviewer can only review a rental once.
///
/// Expected: Conflict on the second review
#[tokio::test]
async fn one_review_per_reviewer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_completion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Completed)
            .await?;
    let completion = factory::rental_completion::create_rental_completion(
        db,
        &reservation,
        CompletionStatus::Completed,
    )
    .await?;

    let service = RentalCompletionService::new(db);
    let first = service
        .submit_review(&owner.external_id, completion.id, review(5))
        .await?;
    assert_eq!(first.review_type, ReviewType::OwnerToRenter);

    let result = service
        .submit_review(&owner.external_id, completion.id, review(3))
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests star ratings outside 1 to 5.
///
/// Expected: BadRequest for 0 and 6
#[tokio::test]
async fn rejects_out_of_range_rating() -> Result<(), AppError> {
    let test = TestBuilder::new().with_completion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, renter, _vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Completed)
            .await?;
    let completion = factory::rental_completion::create_rental_completion(
        db,
        &reservation,
        CompletionStatus::Completed,
    )
    .await?;

    let service = RentalCompletionService::new(db);
    for rating in [0, 6] {
        let result = service
            .submit_review(&renter.external_id, completion.id, review(rating))
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}
