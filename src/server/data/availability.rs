//! Per-day availability overrides of a vehicle.
//!
//! A missing row means the day is available at the vehicle's daily rate. There is at most one
//! row per (vehicle, date); writes go through `upsert`.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::date_range::DateRange;

/// Values written for one day.
#[derive(Debug, Clone)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub is_available: bool,
    pub reason: Option<String>,
    pub price: Option<i64>,
}

pub struct AvailabilityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Rows of a vehicle ordered by date, limited to `range` when given.
    pub async fn list_by_vehicle(
        &self,
        vehicle_id: i32,
        range: Option<DateRange>,
    ) -> Result<Vec<entity::availability::Model>, DbErr> {
        let mut query = entity::prelude::Availability::find()
            .filter(entity::availability::Column::VehicleId.eq(vehicle_id));

        if let Some(range) = range {
            query = query
                .filter(entity::availability::Column::Date.gte(range.start))
                .filter(entity::availability::Column::Date.lte(range.end));
        }

        query
            .order_by_asc(entity::availability::Column::Date)
            .all(self.db)
            .await
    }

    /// Dates inside `range` marked unavailable, ascending.
    pub async fn blocked_dates(
        &self,
        vehicle_id: i32,
        range: DateRange,
    ) -> Result<Vec<NaiveDate>, DbErr> {
        let rows = entity::prelude::Availability::find()
            .filter(entity::availability::Column::VehicleId.eq(vehicle_id))
            .filter(entity::availability::Column::IsAvailable.eq(false))
            .filter(entity::availability::Column::Date.gte(range.start))
            .filter(entity::availability::Column::Date.lte(range.end))
            .order_by_asc(entity::availability::Column::Date)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.date).collect())
    }

    /// Writes the row for `day.date`, replacing any existing row for that date.
    pub async fn upsert(
        &self,
        vehicle_id: i32,
        day: DayAvailability,
    ) -> Result<entity::availability::Model, DbErr> {
        let existing = entity::prelude::Availability::find()
            .filter(entity::availability::Column::VehicleId.eq(vehicle_id))
            .filter(entity::availability::Column::Date.eq(day.date))
            .one(self.db)
            .await?;

        match existing {
            Some(row) => {
                let mut active = row.into_active_model();
                active.is_available = ActiveValue::Set(day.is_available);
                active.reason = ActiveValue::Set(day.reason);
                active.price = ActiveValue::Set(day.price);
                active.update(self.db).await
            }
            None => {
                entity::availability::ActiveModel {
                    vehicle_id: ActiveValue::Set(vehicle_id),
                    date: ActiveValue::Set(day.date),
                    is_available: ActiveValue::Set(day.is_available),
                    reason: ActiveValue::Set(day.reason),
                    price: ActiveValue::Set(day.price),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Removes the rows of every day in `range`. Returns the number of rows removed.
    pub async fn delete_range(&self, vehicle_id: i32, range: DateRange) -> Result<u64, DbErr> {
        let result = entity::prelude::Availability::delete_many()
            .filter(entity::availability::Column::VehicleId.eq(vehicle_id))
            .filter(entity::availability::Column::Date.gte(range.start))
            .filter(entity::availability::Column::Date.lte(range.end))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
