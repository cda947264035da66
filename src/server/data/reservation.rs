//! Reservation repository.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{ReservationPaymentStatus, ReservationStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::{
    date_range::DateRange,
    party::Party,
    reservation::{CreateReservationParams, BLOCKING_STATUSES},
};

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a `pending` reservation.
    pub async fn create(
        &self,
        params: CreateReservationParams,
    ) -> Result<entity::reservation::Model, DbErr> {
        let now = Utc::now();
        entity::reservation::ActiveModel {
            vehicle_id: ActiveValue::Set(params.vehicle_id),
            renter_id: ActiveValue::Set(params.renter_id),
            owner_id: ActiveValue::Set(params.owner_id),
            start_date: ActiveValue::Set(params.range.start),
            end_date: ActiveValue::Set(params.range.end),
            pickup_time: ActiveValue::Set(params.pickup_time),
            dropoff_time: ActiveValue::Set(params.dropoff_time),
            total_days: ActiveValue::Set(params.total_days),
            daily_rate: ActiveValue::Set(params.daily_rate),
            total_amount: ActiveValue::Set(params.total_amount),
            status: ActiveValue::Set(ReservationStatus::Pending),
            renter_message: ActiveValue::Set(params.renter_message),
            owner_message: ActiveValue::Set(None),
            cancellation_reason: ActiveValue::Set(None),
            payment_id: ActiveValue::Set(None),
            payment_status: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(id).one(self.db).await
    }

    /// Pending or confirmed reservations of the vehicle overlapping `range`, inclusively.
    pub async fn overlapping(
        &self,
        vehicle_id: i32,
        range: DateRange,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::VehicleId.eq(vehicle_id))
            .filter(entity::reservation::Column::Status.is_in(BLOCKING_STATUSES))
            .filter(entity::reservation::Column::StartDate.lte(range.end))
            .filter(entity::reservation::Column::EndDate.gte(range.start))
            .order_by_asc(entity::reservation::Column::StartDate)
            .all(self.db)
            .await
    }

    /// Reservations where the user is on `party`'s side, newest first.
    pub async fn list_for_user(
        &self,
        user_id: &str,
        party: Party,
        status: Option<ReservationStatus>,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        let mut query = entity::prelude::Reservation::find().filter(party_column(party).eq(user_id));

        if let Some(status) = status {
            query = query.filter(entity::reservation::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::reservation::Column::CreatedAt)
            .order_by_desc(entity::reservation::Column::Id)
            .all(self.db)
            .await
    }

    /// Confirmed reservations starting on or after `today`, soonest first.
    pub async fn upcoming(
        &self,
        user_id: &str,
        party: Party,
        today: NaiveDate,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(party_column(party).eq(user_id))
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::Confirmed))
            .filter(entity::reservation::Column::StartDate.gte(today))
            .order_by_asc(entity::reservation::Column::StartDate)
            .all(self.db)
            .await
    }

    /// Confirmed reservations whose last day is before `today`.
    pub async fn confirmed_ended_before(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::Confirmed))
            .filter(entity::reservation::Column::EndDate.lt(today))
            .order_by_asc(entity::reservation::Column::EndDate)
            .all(self.db)
            .await
    }

    /// Moves the reservation to `status`. `None` notes keep their current value.
    pub async fn update_status(
        &self,
        reservation: entity::reservation::Model,
        status: ReservationStatus,
        owner_message: Option<String>,
        cancellation_reason: Option<String>,
    ) -> Result<entity::reservation::Model, DbErr> {
        let mut active = reservation.into_active_model();
        active.status = ActiveValue::Set(status);
        if owner_message.is_some() {
            active.owner_message = ActiveValue::Set(owner_message);
        }
        if cancellation_reason.is_some() {
            active.cancellation_reason = ActiveValue::Set(cancellation_reason);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Links a payment and records its progress on the reservation.
    pub async fn set_payment(
        &self,
        reservation: entity::reservation::Model,
        payment_id: i32,
        payment_status: ReservationPaymentStatus,
    ) -> Result<entity::reservation::Model, DbErr> {
        let mut active = reservation.into_active_model();
        active.payment_id = ActiveValue::Set(Some(payment_id));
        active.payment_status = ActiveValue::Set(Some(payment_status));
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Records a payment outcome, optionally moving the booking status with it.
    pub async fn set_payment_outcome(
        &self,
        reservation_id: i32,
        status: Option<ReservationStatus>,
        payment_status: ReservationPaymentStatus,
    ) -> Result<(), DbErr> {
        let Some(reservation) = self.find_by_id(reservation_id).await? else {
            return Ok(());
        };

        let mut active = reservation.into_active_model();
        if let Some(status) = status {
            active.status = ActiveValue::Set(status);
        }
        active.payment_status = ActiveValue::Set(Some(payment_status));
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(())
    }
}

fn party_column(party: Party) -> entity::reservation::Column {
    match party {
        Party::Renter => entity::reservation::Column::RenterId,
        Party::Owner => entity::reservation::Column::OwnerId,
    }
}
