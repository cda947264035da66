use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active conversation about a vehicle between a renter and its owner.
pub async fn create_conversation(
    db: &DatabaseConnection,
    vehicle: &entity::vehicle::Model,
    renter_id: &str,
) -> Result<entity::conversation::Model, DbErr> {
    let now = Utc::now();
    entity::conversation::ActiveModel {
        vehicle_id: ActiveValue::Set(vehicle.id),
        renter_id: ActiveValue::Set(renter_id.to_string()),
        owner_id: ActiveValue::Set(vehicle.owner_id.clone()),
        last_message_at: ActiveValue::Set(now),
        last_message_text: ActiveValue::Set(None),
        last_message_sender_id: ActiveValue::Set(None),
        unread_count_renter: ActiveValue::Set(0),
        unread_count_owner: ActiveValue::Set(0),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
