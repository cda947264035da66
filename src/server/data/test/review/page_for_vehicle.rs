use super::*;

/// Tests paging through a vehicle's reviews with an id cursor.
///
/// Expected: first page holds the two newest, second page the remaining one
#[tokio::test]
async fn pages_with_id_cursor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_completion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, renter, vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Completed)
            .await?;
    let completion = factory::rental_completion::create_rental_completion(
        db,
        &reservation,
        CompletionStatus::Completed,
    )
    .await?;

    let repo = ReviewRepository::new(db);
    let mut ids = Vec::new();
    for rating in [3, 4, 5] {
        let created = repo
            .create(
                &completion,
                &renter.external_id,
                &owner.external_id,
                ReviewType::RenterToOwner,
                review(rating),
            )
            .await?;
        ids.push(created.id);
    }

    let first = repo.page_for_vehicle(vehicle.id, None, 2).await?;
    assert_eq!(
        first.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![ids[2], ids[1]]
    );

    let second = repo
        .page_for_vehicle(vehicle.id, Some(first[1].id), 2)
        .await?;
    assert_eq!(second.iter().map(|r| r.id).collect::<Vec<_>>(), vec![ids[0]]);

    Ok(())
}

/// Tests that owner-to-renter reviews are not listed under the vehicle.
///
/// Expected: empty page
#[tokio::test]
async fn excludes_owner_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_completion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, renter, vehicle, reservation) =
        factory::helpers::create_reservation_with_dependencies(db, ReservationStatus::Completed)
            .await?;
    let completion = factory::rental_completion::create_rental_completion(
        db,
        &reservation,
        CompletionStatus::Completed,
    )
    .await?;

    let repo = ReviewRepository::new(db);
    repo.create(
        &completion,
        &owner.external_id,
        &renter.external_id,
        ReviewType::OwnerToRenter,
        review(5),
    )
    .await?;

    assert!(repo.page_for_vehicle(vehicle.id, None, 10).await?.is_empty());

    Ok(())
}
