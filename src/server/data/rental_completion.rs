//! Rental completion repository.

use chrono::Utc;
use entity::{
    json::{OwnerReturnReview, RenterReturnForm},
    sea_orm_active_enums::CompletionStatus,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::party::Party;

pub struct RentalCompletionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RentalCompletionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Opens the workflow for a reservation in `pending_renter`.
    pub async fn create(
        &self,
        reservation: &entity::reservation::Model,
    ) -> Result<entity::rental_completion::Model, DbErr> {
        let now = Utc::now();
        entity::rental_completion::ActiveModel {
            reservation_id: ActiveValue::Set(reservation.id),
            vehicle_id: ActiveValue::Set(reservation.vehicle_id),
            renter_id: ActiveValue::Set(reservation.renter_id.clone()),
            owner_id: ActiveValue::Set(reservation.owner_id.clone()),
            status: ActiveValue::Set(CompletionStatus::PendingRenter),
            renter_return_form: ActiveValue::Set(None),
            owner_return_review: ActiveValue::Set(None),
            completion_notes: ActiveValue::Set(None),
            completed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::rental_completion::Model>, DbErr> {
        entity::prelude::RentalCompletion::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_reservation(
        &self,
        reservation_id: i32,
    ) -> Result<Option<entity::rental_completion::Model>, DbErr> {
        entity::prelude::RentalCompletion::find()
            .filter(entity::rental_completion::Column::ReservationId.eq(reservation_id))
            .one(self.db)
            .await
    }

    /// Reservation ids among `reservation_ids` that already have a completion.
    pub async fn reservation_ids_with_completion(
        &self,
        reservation_ids: Vec<i32>,
    ) -> Result<Vec<i32>, DbErr> {
        if reservation_ids.is_empty() {
            return Ok(Vec::new());
        }

        let completions = entity::prelude::RentalCompletion::find()
            .filter(entity::rental_completion::Column::ReservationId.is_in(reservation_ids))
            .all(self.db)
            .await?;

        Ok(completions.into_iter().map(|c| c.reservation_id).collect())
    }

    /// Completions on `party`'s side, optionally in one status, newest first.
    pub async fn list_for_user(
        &self,
        user_id: &str,
        party: Party,
        status: Option<CompletionStatus>,
    ) -> Result<Vec<entity::rental_completion::Model>, DbErr> {
        let column = match party {
            Party::Renter => entity::rental_completion::Column::RenterId,
            Party::Owner => entity::rental_completion::Column::OwnerId,
        };
        let mut query = entity::prelude::RentalCompletion::find().filter(column.eq(user_id));

        if let Some(status) = status {
            query = query.filter(entity::rental_completion::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::rental_completion::Column::CreatedAt)
            .order_by_desc(entity::rental_completion::Column::Id)
            .all(self.db)
            .await
    }

    /// Stores the renter's form and hands the workflow to the owner.
    pub async fn save_renter_return(
        &self,
        completion: entity::rental_completion::Model,
        form: RenterReturnForm,
    ) -> Result<entity::rental_completion::Model, DbErr> {
        let mut active = completion.into_active_model();
        active.renter_return_form = ActiveValue::Set(Some(form));
        active.status = ActiveValue::Set(CompletionStatus::PendingOwner);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Stores the owner's review and closes the workflow.
    pub async fn save_owner_review(
        &self,
        completion: entity::rental_completion::Model,
        review: OwnerReturnReview,
        completion_notes: Option<String>,
    ) -> Result<entity::rental_completion::Model, DbErr> {
        let now = Utc::now();
        let mut active = completion.into_active_model();
        active.owner_return_review = ActiveValue::Set(Some(review));
        active.completion_notes = ActiveValue::Set(completion_notes);
        active.status = ActiveValue::Set(CompletionStatus::Completed);
        active.completed_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await
    }
}
