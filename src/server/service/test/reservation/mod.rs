use crate::{
    model::reservation::CreateReservationDto,
    server::{error::AppError, service::reservation::ReservationService},
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::ReservationStatus;
use test_utils::{builder::TestBuilder, factory};

mod create;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, day).unwrap()
}

fn booking(vehicle_id: i32, start: u32, end: u32) -> CreateReservationDto {
    CreateReservationDto {
        vehicle_id,
        start_date: date(start),
        end_date: date(end),
        pickup_time: None,
        dropoff_time: None,
        renter_message: None,
    }
}
