use super::*;

/// Tests that the newest active settings row wins.
///
/// Expected: None before any row, then the latest row
#[tokio::test]
async fn returns_latest_active_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlatformSettingsRepository::new(db);
    assert!(repo.active().await?.is_none());

    repo.create(5.0, 100, Some(5000)).await?;
    let latest = repo.create(7.5, 200, None).await?;

    let active = repo.active().await?.unwrap();
    assert_eq!(active.id, latest.id);
    assert_eq!(active.platform_fee_percentage, 7.5);

    Ok(())
}
