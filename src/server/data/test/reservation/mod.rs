use crate::server::{
    data::reservation::ReservationRepository,
    model::{date_range::DateRange, party::Party},
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::ReservationStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod confirmed_ended_before;
mod list_for_user;
mod overlapping;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, month, day).unwrap()
}
