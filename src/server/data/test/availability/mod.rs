use crate::server::{
    data::availability::{AvailabilityRepository, DayAvailability},
    model::date_range::DateRange,
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod blocked_dates;
mod upsert;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, day).unwrap()
}
