//! Per-day vehicle availability and the conflict check shared with bookings.

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::availability::{BlockDateDto, BlockRangeDto, SetDefaultAvailabilityDto},
    server::{
        data::{
            availability::{AvailabilityRepository, DayAvailability},
            reservation::ReservationRepository,
            vehicle::VehicleRepository,
        },
        error::AppError,
        model::{
            availability::{AvailabilityCheck, Calendar},
            date_range::DateRange,
        },
        service::vehicle::owned_vehicle,
    },
};

/// Blocked dates and pending or confirmed reservations overlapping `range`.
pub(crate) async fn check_range<C: ConnectionTrait>(
    db: &C,
    vehicle_id: i32,
    range: DateRange,
) -> Result<AvailabilityCheck, AppError> {
    let blocked_dates = AvailabilityRepository::new(db)
        .blocked_dates(vehicle_id, range)
        .await?;
    let conflicting_reservations = ReservationRepository::new(db)
        .overlapping(vehicle_id, range)
        .await?;

    Ok(AvailabilityCheck {
        blocked_dates,
        conflicting_reservations,
    })
}

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rows of the vehicle ordered by date, optionally bounded on either side.
    pub async fn get_by_vehicle(
        &self,
        vehicle_id: i32,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<entity::availability::Model>, AppError> {
        if let (Some(start), Some(end)) = (start, end) {
            DateRange::new(start, end)?;
        }

        let rows = AvailabilityRepository::new(self.db)
            .list_by_vehicle(vehicle_id, None)
            .await?;

        Ok(rows
            .into_iter()
            .filter(|row| start.is_none_or(|start| row.date >= start))
            .filter(|row| end.is_none_or(|end| row.date <= end))
            .collect())
    }

    pub async fn check(
        &self,
        vehicle_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AvailabilityCheck, AppError> {
        let range = DateRange::new(start, end)?;
        VehicleRepository::new(self.db)
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        check_range(self.db, vehicle_id, range).await
    }

    /// Availability rows and live reservations touching a calendar month.
    pub async fn calendar(
        &self,
        vehicle_id: i32,
        year: i32,
        month: u32,
    ) -> Result<Calendar, AppError> {
        let range = DateRange::month(year, month)
            .ok_or_else(|| AppError::BadRequest("Invalid month".to_string()))?;

        let availability = AvailabilityRepository::new(self.db)
            .list_by_vehicle(vehicle_id, Some(range))
            .await?;
        let reservations = ReservationRepository::new(self.db)
            .overlapping(vehicle_id, range)
            .await?;

        Ok(Calendar {
            vehicle_id,
            range,
            availability,
            reservations,
        })
    }

    pub async fn block_date(
        &self,
        user_id: &str,
        vehicle_id: i32,
        day: BlockDateDto,
    ) -> Result<entity::availability::Model, AppError> {
        let vehicle = owned_vehicle(self.db, vehicle_id, user_id).await?;

        Ok(AvailabilityRepository::new(self.db)
            .upsert(
                vehicle.id,
                DayAvailability {
                    date: day.date,
                    is_available: false,
                    reason: day.reason,
                    price: day.price,
                },
            )
            .await?)
    }

    /// Marks every day of the range unavailable.
    pub async fn block_range(
        &self,
        user_id: &str,
        vehicle_id: i32,
        block: BlockRangeDto,
    ) -> Result<Vec<entity::availability::Model>, AppError> {
        let range = DateRange::new(block.start_date, block.end_date)?;
        let vehicle = owned_vehicle(self.db, vehicle_id, user_id).await?;

        self.write_range(vehicle.id, range, false, block.reason)
            .await
    }

    /// Deletes the row for `date`, returning the vehicle to its default.
    pub async fn unblock_date(
        &self,
        user_id: &str,
        vehicle_id: i32,
        date: NaiveDate,
    ) -> Result<u64, AppError> {
        let vehicle = owned_vehicle(self.db, vehicle_id, user_id).await?;

        Ok(AvailabilityRepository::new(self.db)
            .delete_range(vehicle.id, DateRange::new(date, date)?)
            .await?)
    }

    pub async fn unblock_range(
        &self,
        user_id: &str,
        vehicle_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<u64, AppError> {
        let range = DateRange::new(start, end)?;
        let vehicle = owned_vehicle(self.db, vehicle_id, user_id).await?;

        Ok(AvailabilityRepository::new(self.db)
            .delete_range(vehicle.id, range)
            .await?)
    }

    /// Writes an explicit available or unavailable row for every day of the range.
    pub async fn set_default(
        &self,
        user_id: &str,
        vehicle_id: i32,
        default: SetDefaultAvailabilityDto,
    ) -> Result<Vec<entity::availability::Model>, AppError> {
        let range = DateRange::new(default.start_date, default.end_date)?;
        let vehicle = owned_vehicle(self.db, vehicle_id, user_id).await?;

        self.write_range(vehicle.id, range, default.is_available, None)
            .await
    }

    async fn write_range(
        &self,
        vehicle_id: i32,
        range: DateRange,
        is_available: bool,
        reason: Option<String>,
    ) -> Result<Vec<entity::availability::Model>, AppError> {
        let txn = self.db.begin().await?;
        let repo = AvailabilityRepository::new(&txn);

        let mut rows = Vec::new();
        for date in range.days() {
            let row = repo
                .upsert(
                    vehicle_id,
                    DayAvailability {
                        date,
                        is_available,
                        reason: reason.clone(),
                        price: None,
                    },
                )
                .await?;
            rows.push(row);
        }

        txn.commit().await?;

        Ok(rows)
    }
}
