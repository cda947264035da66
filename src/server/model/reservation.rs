//! Reservation parameters and status rules.

use entity::sea_orm_active_enums::ReservationStatus;

use crate::model::reservation::ReservationDto;
use crate::server::model::date_range::DateRange;

/// Statuses that hold a vehicle's dates.
pub const BLOCKING_STATUSES: [ReservationStatus; 2] =
    [ReservationStatus::Pending, ReservationStatus::Confirmed];

/// Priced booking ready to be inserted.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub vehicle_id: i32,
    pub renter_id: String,
    pub owner_id: String,
    pub range: DateRange,
    pub pickup_time: Option<String>,
    pub dropoff_time: Option<String>,
    pub total_days: i32,
    pub daily_rate: i64,
    pub total_amount: i64,
    pub renter_message: Option<String>,
}

/// Owner or renter decision moving a reservation out of its current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationTransition {
    Approve,
    Decline,
    Cancel,
    Complete,
}

impl ReservationTransition {
    /// Status reached from `from`, or `None` when the move is not allowed.
    pub fn apply(self, from: ReservationStatus) -> Option<ReservationStatus> {
        use ReservationStatus::*;

        match (self, from) {
            (Self::Approve, Pending) => Some(Confirmed),
            (Self::Decline, Pending) => Some(Declined),
            (Self::Cancel, Pending | Confirmed) => Some(Cancelled),
            (Self::Complete, Confirmed) => Some(Completed),
            _ => None,
        }
    }
}

impl From<entity::reservation::Model> for ReservationDto {
    fn from(r: entity::reservation::Model) -> Self {
        Self {
            id: r.id,
            vehicle_id: r.vehicle_id,
            renter_id: r.renter_id,
            owner_id: r.owner_id,
            start_date: r.start_date,
            end_date: r.end_date,
            pickup_time: r.pickup_time,
            dropoff_time: r.dropoff_time,
            total_days: r.total_days,
            daily_rate: r.daily_rate,
            total_amount: r.total_amount,
            status: r.status,
            renter_message: r.renter_message,
            owner_message: r.owner_message,
            cancellation_reason: r.cancellation_reason,
            payment_id: r.payment_id,
            payment_status: r.payment_status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
