use chrono::NaiveDate;
use entity::sea_orm_active_enums::ReservationStatus;

use crate::{
    model::availability::{BlockDateDto, BlockRangeDto, SetDefaultAvailabilityDto},
    server::{error::AppError, service::availability::AvailabilityService},
};
use test_utils::{builder::TestBuilder, factory};

mod check;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, month, day).unwrap()
}
