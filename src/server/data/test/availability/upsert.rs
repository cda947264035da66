use super::*;

/// Tests that writing the same date twice keeps a single row with the latest values.
///
/// Expected: one row, now available with the new price
#[tokio::test]
async fn replaces_existing_row_for_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _track, vehicle) =
        factory::helpers::create_vehicle_with_dependencies(db).await?;

    let repo = AvailabilityRepository::new(db);
    let first = repo
        .upsert(
            vehicle.id,
            DayAvailability {
                date: date(10),
                is_available: false,
                reason: Some("Maintenance".to_string()),
                price: None,
            },
        )
        .await?;
    let second = repo
        .upsert(
            vehicle.id,
            DayAvailability {
                date: date(10),
                is_available: true,
                reason: None,
                price: Some(60_000),
            },
        )
        .await?;

    assert_eq!(first.id, second.id);
    assert!(second.is_available);
    assert_eq!(second.price, Some(60_000));
    assert!(second.reason.is_none());

    let rows = repo.list_by_vehicle(vehicle.id, None).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Tests that rows are kept per vehicle.
///
/// Expected: each vehicle sees only its own row
#[tokio::test]
async fn keeps_rows_per_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, track, first) = factory::helpers::create_vehicle_with_dependencies(db).await?;
    let second = factory::create_vehicle(db, &owner.external_id, track.id).await?;

    let repo = AvailabilityRepository::new(db);
    for vehicle_id in [first.id, second.id] {
        repo.upsert(
            vehicle_id,
            DayAvailability {
                date: date(10),
                is_available: false,
                reason: None,
                price: None,
            },
        )
        .await?;
    }

    assert_eq!(repo.list_by_vehicle(first.id, None).await?.len(), 1);
    assert_eq!(repo.list_by_vehicle(second.id, None).await?.len(), 1);

    Ok(())
}
