use super::*;

/// Tests that the reviewed owner can respond exactly once.
///
/// Expected: first response stored, second Conflict
#[tokio::test]
async fn reviewed_party_responds_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_completion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _vehicle, reviews) = vehicle_with_reviews(db, 1).await?;

    let service = ReviewService::new(db);
    let responded = service
        .respond(&owner.external_id, reviews[0].id, "Thanks!".to_string())
        .await?;
    assert_eq!(
        responded.response.map(|r| r.text).as_deref(),
        Some("Thanks!")
    );

    let again = service
        .respond(&owner.external_id, reviews[0].id, "Again".to_string())
        .await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that only the reviewed user may respond.
///
/// Expected: Forbidden for the reviewer
#[tokio::test]
async fn reviewer_cannot_respond() -> Result<(), AppError> {
    let test = TestBuilder::new().with_completion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _vehicle, reviews) = vehicle_with_reviews(db, 1).await?;

    let result = ReviewService::new(db)
        .respond(&reviews[0].reviewer_id, reviews[0].id, "Hi".to_string())
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests that deleting a review refreshes the reviewed user's rating.
///
/// Expected: rating cleared once the only review is gone
#[tokio::test]
async fn delete_refreshes_rating() -> Result<(), AppError> {
    let test = TestBuilder::new().with_completion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _vehicle, reviews) = vehicle_with_reviews(db, 1).await?;
    UserRepository::new(db)
        .set_rating(&owner.external_id, Some(5.0))
        .await?;

    let service = ReviewService::new(db);
    assert!(matches!(
        service.delete(&owner.external_id, reviews[0].id).await,
        Err(AppError::Forbidden(_))
    ));

    service
        .delete(&reviews[0].reviewer_id, reviews[0].id)
        .await?;

    let owner = UserRepository::new(db)
        .find_by_external_id(&owner.external_id)
        .await?
        .unwrap();
    assert_eq!(owner.rating, None);

    Ok(())
}
