use chrono::NaiveDate;

use crate::model::{
    availability::{AvailabilityCheckDto, AvailabilityDto, CalendarDto},
    reservation::ReservationDto,
};
use crate::server::model::date_range::DateRange;

/// Outcome of testing a range against blocked dates and live reservations.
#[derive(Debug, Clone)]
pub struct AvailabilityCheck {
    pub blocked_dates: Vec<NaiveDate>,
    pub conflicting_reservations: Vec<entity::reservation::Model>,
}

impl AvailabilityCheck {
    pub fn is_available(&self) -> bool {
        self.blocked_dates.is_empty() && self.conflicting_reservations.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Calendar {
    pub vehicle_id: i32,
    pub range: DateRange,
    pub availability: Vec<entity::availability::Model>,
    pub reservations: Vec<entity::reservation::Model>,
}

impl From<entity::availability::Model> for AvailabilityDto {
    fn from(row: entity::availability::Model) -> Self {
        Self {
            id: row.id,
            vehicle_id: row.vehicle_id,
            date: row.date,
            is_available: row.is_available,
            reason: row.reason,
            price: row.price,
        }
    }
}

impl From<AvailabilityCheck> for AvailabilityCheckDto {
    fn from(check: AvailabilityCheck) -> Self {
        Self {
            is_available: check.is_available(),
            blocked_dates: check.blocked_dates,
            conflicting_reservations: check
                .conflicting_reservations
                .into_iter()
                .map(ReservationDto::from)
                .collect(),
        }
    }
}

impl From<Calendar> for CalendarDto {
    fn from(calendar: Calendar) -> Self {
        Self {
            vehicle_id: calendar.vehicle_id,
            start_date: calendar.range.start,
            end_date: calendar.range.end,
            availability: calendar
                .availability
                .into_iter()
                .map(AvailabilityDto::from)
                .collect(),
            reservations: calendar
                .reservations
                .into_iter()
                .map(ReservationDto::from)
                .collect(),
        }
    }
}
