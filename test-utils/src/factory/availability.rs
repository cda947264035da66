use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an availability row for a single date.
///
/// # Arguments
/// - `db` - Database connection
/// - `vehicle_id` - Vehicle the row belongs to
/// - `date` - Calendar date
/// - `is_available` - `false` blocks the date
pub async fn create_availability(
    db: &DatabaseConnection,
    vehicle_id: i32,
    date: NaiveDate,
    is_available: bool,
) -> Result<entity::availability::Model, DbErr> {
    entity::availability::ActiveModel {
        vehicle_id: ActiveValue::Set(vehicle_id),
        date: ActiveValue::Set(date),
        is_available: ActiveValue::Set(is_available),
        reason: ActiveValue::Set(None),
        price: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Shorthand for a blocked date.
pub async fn create_blocked_date(
    db: &DatabaseConnection,
    vehicle_id: i32,
    date: NaiveDate,
) -> Result<entity::availability::Model, DbErr> {
    create_availability(db, vehicle_id, date, false).await
}
