use chrono::Utc;
use entity::sea_orm_active_enums::CompletionStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a rental completion for a reservation in the given status.
pub async fn create_rental_completion(
    db: &DatabaseConnection,
    reservation: &entity::reservation::Model,
    status: CompletionStatus,
) -> Result<entity::rental_completion::Model, DbErr> {
    let now = Utc::now();
    entity::rental_completion::ActiveModel {
        reservation_id: ActiveValue::Set(reservation.id),
        vehicle_id: ActiveValue::Set(reservation.vehicle_id),
        renter_id: ActiveValue::Set(reservation.renter_id.clone()),
        owner_id: ActiveValue::Set(reservation.owner_id.clone()),
        status: ActiveValue::Set(status),
        renter_return_form: ActiveValue::Set(None),
        owner_return_review: ActiveValue::Set(None),
        completion_notes: ActiveValue::Set(None),
        completed_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
