//! Reservations between a renter and a vehicle owner.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::ReservationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for reservation rows.
///
/// Defaults: 2030-06-01 to 2030-06-03 (two days) at the vehicle's daily rate, status
/// `pending`, no payment.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    vehicle_id: i32,
    owner_id: String,
    renter_id: String,
    daily_rate: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: ReservationStatus,
}

impl<'a> ReservationFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        vehicle: &entity::vehicle::Model,
        renter_id: &str,
    ) -> Self {
        Self {
            db,
            vehicle_id: vehicle.id,
            owner_id: vehicle.owner_id.clone(),
            renter_id: renter_id.to_string(),
            daily_rate: vehicle.daily_rate,
            start_date: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2030, 6, 3).unwrap(),
            status: ReservationStatus::Pending,
        }
    }

    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        let now = Utc::now();
        let total_days = (self.end_date - self.start_date).num_days() as i32;
        entity::reservation::ActiveModel {
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            renter_id: ActiveValue::Set(self.renter_id),
            owner_id: ActiveValue::Set(self.owner_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            pickup_time: ActiveValue::Set(None),
            dropoff_time: ActiveValue::Set(None),
            total_days: ActiveValue::Set(total_days),
            daily_rate: ActiveValue::Set(self.daily_rate),
            total_amount: ActiveValue::Set(self.daily_rate * total_days as i64),
            status: ActiveValue::Set(self.status),
            renter_message: ActiveValue::Set(None),
            owner_message: ActiveValue::Set(None),
            cancellation_reason: ActiveValue::Set(None),
            payment_id: ActiveValue::Set(None),
            payment_status: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending reservation with the default dates.
pub async fn create_reservation(
    db: &DatabaseConnection,
    vehicle: &entity::vehicle::Model,
    renter_id: &str,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, vehicle, renter_id).build().await
}
