use super::*;

/// Tests listing reviews by the reviewed user versus by the author.
///
/// Expected: owner sees it as received, renter as written
#[tokio::test]
async fn lists_by_role() -> Result<(), DbErr> {
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

    let repo = ReviewRepository::new(db);
    let created = repo
        .create(
            &completion,
            &renter.external_id,
            &owner.external_id,
            ReviewType::RenterToOwner,
            review(4),
        )
        .await?;

    let received = repo
        .list_public_for_user(&owner.external_id, ReviewRole::Reviewed)
        .await?;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].id, created.id);

    let written = repo
        .list_public_for_user(&renter.external_id, ReviewRole::Reviewer)
        .await?;
    assert_eq!(written.len(), 1);

    assert!(repo
        .list_public_for_user(&owner.external_id, ReviewRole::Reviewer)
        .await?
        .is_empty());

    Ok(())
}
