use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::reservation::ReservationDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AvailabilityDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub date: NaiveDate,
    pub is_available: bool,
    pub reason: Option<String>,
    /// Price override for the day in cents.
    pub price: Option<i64>,
}

/// Result of checking a date range against blocked dates and existing bookings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AvailabilityCheckDto {
    pub is_available: bool,
    pub blocked_dates: Vec<NaiveDate>,
    pub conflicting_reservations: Vec<ReservationDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CalendarDto {
    pub vehicle_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub availability: Vec<AvailabilityDto>,
    pub reservations: Vec<ReservationDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct BlockDateDto {
    pub date: NaiveDate,
    pub reason: Option<String>,
    pub price: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct BlockRangeDto {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct DateRangeDto {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SetDefaultAvailabilityDto {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_available: bool,
}
