use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{ReservationPaymentStatus, ReservationStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub renter_id: String,
    pub owner_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub pickup_time: Option<String>,
    pub dropoff_time: Option<String>,
    pub total_days: i32,
    pub daily_rate: i64,
    pub total_amount: i64,
    #[schema(value_type = String)]
    pub status: ReservationStatus,
    pub renter_message: Option<String>,
    pub owner_message: Option<String>,
    pub cancellation_reason: Option<String>,
    pub payment_id: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub payment_status: Option<ReservationPaymentStatus>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateReservationDto {
    pub vehicle_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub pickup_time: Option<String>,
    pub dropoff_time: Option<String>,
    pub renter_message: Option<String>,
}

/// Owner's note attached when approving or declining.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct RespondToReservationDto {
    pub owner_message: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CancelReservationDto {
    pub reason: Option<String>,
}
