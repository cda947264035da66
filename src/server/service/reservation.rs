//! Booking lifecycle: creation with conflict checks and owner/renter transitions.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::ReservationStatus;
use sea_orm::{ActiveEnum, ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::reservation::CreateReservationDto,
    server::{
        data::{reservation::ReservationRepository, vehicle::VehicleRepository},
        error::AppError,
        model::{
            date_range::DateRange,
            party::Party,
            reservation::{CreateReservationParams, ReservationTransition},
        },
        service::availability::check_range,
    },
};

async fn find_reservation<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<entity::reservation::Model, AppError> {
    ReservationRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))
}

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a vehicle for the renter.
    ///
    /// The conflict checks and the insert share one transaction.
    ///
    /// # Returns
    /// - `Ok(reservation)` - Pending reservation priced at `nights * daily_rate`
    /// - `Err(AppError::NotFound)` - Vehicle missing or deactivated
    /// - `Err(AppError::BadRequest)` - Own vehicle or empty date range
    /// - `Err(AppError::Conflict)` - Blocked dates or overlapping reservations
    pub async fn create(
        &self,
        renter_id: &str,
        booking: CreateReservationDto,
    ) -> Result<entity::reservation::Model, AppError> {
        let txn = self.db.begin().await?;

        let vehicle = VehicleRepository::new(&txn)
            .find_by_id(booking.vehicle_id)
            .await?
            .filter(|v| v.is_active)
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        if vehicle.owner_id == renter_id {
            return Err(AppError::BadRequest(
                "Cannot book your own vehicle".to_string(),
            ));
        }

        let range = DateRange::new(booking.start_date, booking.end_date)?;
        let total_days = range.nights();
        if total_days <= 0 {
            return Err(AppError::BadRequest("Invalid date range".to_string()));
        }

        let check = check_range(&txn, vehicle.id, range).await?;
        if !check.blocked_dates.is_empty() {
            return Err(AppError::Conflict(
                "Selected dates are not available".to_string(),
            ));
        }
        if !check.conflicting_reservations.is_empty() {
            return Err(AppError::Conflict(
                "Selected dates conflict with existing reservations".to_string(),
            ));
        }

        let reservation = ReservationRepository::new(&txn)
            .create(CreateReservationParams {
                vehicle_id: vehicle.id,
                renter_id: renter_id.to_string(),
                owner_id: vehicle.owner_id,
                range,
                pickup_time: booking.pickup_time,
                dropoff_time: booking.dropoff_time,
                total_days: total_days as i32,
                daily_rate: vehicle.daily_rate,
                total_amount: total_days * vehicle.daily_rate,
                renter_message: booking.renter_message,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Reservation {} created for vehicle {} ({} to {})",
            reservation.id,
            reservation.vehicle_id,
            reservation.start_date,
            reservation.end_date
        );

        Ok(reservation)
    }

    /// Reservations on the user's `party` side, newest first.
    pub async fn list_for_user(
        &self,
        user_id: &str,
        party: Party,
        status: Option<ReservationStatus>,
    ) -> Result<Vec<entity::reservation::Model>, AppError> {
        Ok(ReservationRepository::new(self.db)
            .list_for_user(user_id, party, status)
            .await?)
    }

    pub async fn pending_for_owner(
        &self,
        owner_id: &str,
    ) -> Result<Vec<entity::reservation::Model>, AppError> {
        self.list_for_user(owner_id, Party::Owner, Some(ReservationStatus::Pending))
            .await
    }

    pub async fn confirmed_for_owner(
        &self,
        owner_id: &str,
    ) -> Result<Vec<entity::reservation::Model>, AppError> {
        self.list_for_user(owner_id, Party::Owner, Some(ReservationStatus::Confirmed))
            .await
    }

    /// Confirmed reservations starting today or later, soonest first.
    pub async fn upcoming(
        &self,
        user_id: &str,
        party: Party,
    ) -> Result<Vec<entity::reservation::Model>, AppError> {
        let today: NaiveDate = Utc::now().date_naive();

        Ok(ReservationRepository::new(self.db)
            .upcoming(user_id, party, today)
            .await?)
    }

    /// A reservation visible to its renter, its owner or an admin.
    pub async fn get_by_id(
        &self,
        user: &entity::user::Model,
        id: i32,
    ) -> Result<entity::reservation::Model, AppError> {
        let reservation = find_reservation(self.db, id).await?;

        if !user.admin
            && Party::of(&user.external_id, &reservation.renter_id, &reservation.owner_id)
                .is_none()
        {
            return Err(AppError::Forbidden(
                "Not authorized to view this reservation".to_string(),
            ));
        }

        Ok(reservation)
    }

    pub async fn approve(
        &self,
        owner_id: &str,
        id: i32,
        owner_message: Option<String>,
    ) -> Result<entity::reservation::Model, AppError> {
        self.transition(owner_id, id, ReservationTransition::Approve, owner_message, None)
            .await
    }

    pub async fn decline(
        &self,
        owner_id: &str,
        id: i32,
        owner_message: Option<String>,
    ) -> Result<entity::reservation::Model, AppError> {
        self.transition(owner_id, id, ReservationTransition::Decline, owner_message, None)
            .await
    }

    /// Cancels on behalf of either party.
    pub async fn cancel(
        &self,
        user_id: &str,
        id: i32,
        reason: Option<String>,
    ) -> Result<entity::reservation::Model, AppError> {
        self.transition(user_id, id, ReservationTransition::Cancel, None, reason)
            .await
    }

    pub async fn complete(
        &self,
        owner_id: &str,
        id: i32,
    ) -> Result<entity::reservation::Model, AppError> {
        self.transition(owner_id, id, ReservationTransition::Complete, None, None)
            .await
    }

    async fn transition(
        &self,
        user_id: &str,
        id: i32,
        transition: ReservationTransition,
        owner_message: Option<String>,
        cancellation_reason: Option<String>,
    ) -> Result<entity::reservation::Model, AppError> {
        // Status is checked and written in one transaction.
        let txn = self.db.begin().await?;
        let reservation = find_reservation(&txn, id).await?;

        let party = Party::of(user_id, &reservation.renter_id, &reservation.owner_id);
        let allowed = match transition {
            ReservationTransition::Cancel => party.is_some(),
            _ => party == Some(Party::Owner),
        };
        if !allowed {
            return Err(AppError::Forbidden(
                "Not authorized to modify this reservation".to_string(),
            ));
        }

        let status = transition.apply(reservation.status).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Reservation cannot be changed while {}",
                reservation.status.to_value()
            ))
        })?;

        let updated = ReservationRepository::new(&txn)
            .update_status(reservation, status, owner_message, cancellation_reason)
            .await?;

        txn.commit().await?;

        tracing::info!("Reservation {} is now {}", updated.id, status.to_value());

        Ok(updated)
    }
}
