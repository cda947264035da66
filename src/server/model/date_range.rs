//! Inclusive calendar date ranges.

use chrono::{Duration, NaiveDate};

use crate::server::error::AppError;

/// Closed interval of calendar days, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting an end before the start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        if end < start {
            return Err(AppError::BadRequest("Invalid date range".to_string()));
        }
        Ok(Self { start, end })
    }

    /// The whole calendar month, `None` for an invalid year or month.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(Self {
            start,
            end: next.pred_opt()?,
        })
    }

    /// Number of nights between start and end, the unit a booking is charged in.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Inclusive overlap: ranges sharing a single day overlap.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.end && end >= self.start
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let count = self.nights() + 1;
        (0..count).map(move |offset| self.start + Duration::days(offset))
    }
}
