use super::*;

/// Tests walking a vehicle's reviews page by page.
///
/// Expected: pages of 2, 2 and 1 with the cursor ending on the last page
#[tokio::test]
async fn walks_pages_with_cursor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_completion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, vehicle, reviews) = vehicle_with_reviews(db, 5).await?;

    let service = ReviewService::new(db);

    let first = service
        .list_for_vehicle_paginated(vehicle.id, Some(2), None)
        .await?;
    assert_eq!(first.reviews.len(), 2);
    assert!(first.has_more);
    assert_eq!(first.reviews[0].0.id, reviews[4].id);

    let second = service
        .list_for_vehicle_paginated(vehicle.id, Some(2), first.next_cursor)
        .await?;
    assert_eq!(second.reviews.len(), 2);
    assert!(second.has_more);

    let last = service
        .list_for_vehicle_paginated(vehicle.id, Some(2), second.next_cursor)
        .await?;
    assert_eq!(last.reviews.len(), 1);
    assert!(!last.has_more);
    assert_eq!(last.next_cursor, None);
    assert_eq!(last.reviews[0].0.id, reviews[0].id);

    Ok(())
}

/// Tests a page size far beyond any real page.
///
/// Expected: every review on one page and no further cursor
#[tokio::test]
async fn oversized_limit_is_bounded() -> Result<(), AppError> {
    let test = TestBuilder::new().with_completion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, vehicle, _reviews) = vehicle_with_reviews(db, 3).await?;

    let page = ReviewService::new(db)
        .list_for_vehicle_paginated(vehicle.id, Some(u64::MAX), None)
        .await?;

    assert_eq!(page.reviews.len(), 3);
    assert!(!page.has_more);
    assert_eq!(page.next_cursor, None);

    Ok(())
}

/// Tests that the reviewer's profile is attached to each review.
///
/// Expected: reviewer present and matching the review's reviewer id
#[tokio::test]
async fn attaches_reviewer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_completion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, vehicle, _reviews) = vehicle_with_reviews(db, 1).await?;

    let listed = ReviewService::new(db).list_for_vehicle(vehicle.id).await?;

    assert_eq!(listed.len(), 1);
    let (review, reviewer) = &listed[0];
    assert_eq!(
        reviewer.as_ref().map(|u| u.external_id.as_str()),
        Some(review.reviewer_id.as_str())
    );

    Ok(())
}
