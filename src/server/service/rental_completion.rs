//! Post-rental workflow: return form, owner confirmation, vitals and reviews.

use chrono::{NaiveDate, Utc};
use entity::{
    json::{OwnerReturnReview, RenterReturnForm},
    sea_orm_active_enums::{CompletionStatus, ReservationStatus, ReviewType},
};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        rental_completion::{OwnerReviewDto, RenterReturnDto, SubmitVitalsDto},
        review::SubmitReviewDto,
    },
    server::{
        data::{
            rental_completion::RentalCompletionRepository, reservation::ReservationRepository,
            review::ReviewRepository, vehicle_vitals::VehicleVitalsRepository,
        },
        error::AppError,
        model::{
            party::Party,
            rental_completion::{next_status, RentalCompletionDetail},
            review::is_valid_rating,
        },
        service::user::UserService,
    },
};

async fn find_as_participant<C: ConnectionTrait>(
    db: &C,
    user_id: &str,
    id: i32,
) -> Result<(entity::rental_completion::Model, Party), AppError> {
    let completion = RentalCompletionRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Rental completion not found".to_string()))?;

    match Party::of(user_id, &completion.renter_id, &completion.owner_id) {
        Some(party) => Ok((completion, party)),
        None => Err(AppError::Forbidden(
            "Not authorized to access this rental completion".to_string(),
        )),
    }
}

/// Loads the completion for a workflow step that only `party` may take.
///
/// Callers writing the step pass the transaction the write happens in.
async fn find_for_step<C: ConnectionTrait>(
    db: &C,
    user_id: &str,
    id: i32,
    party: Party,
) -> Result<entity::rental_completion::Model, AppError> {
    let (completion, caller) = find_as_participant(db, user_id, id).await?;

    if caller != party {
        return Err(AppError::Forbidden(
            "Not authorized to submit this step".to_string(),
        ));
    }

    if next_status(completion.status, party).is_none() {
        return Err(AppError::BadRequest(
            "Rental completion is not awaiting this step".to_string(),
        ));
    }

    Ok(completion)
}

pub struct RentalCompletionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RentalCompletionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens the completion workflow for a confirmed reservation.
    ///
    /// # Returns
    /// - `Ok(completion)` - New completion awaiting the renter
    /// - `Err(AppError::NotFound)` - Reservation does not exist
    /// - `Err(AppError::Forbidden)` - Caller is not a participant
    /// - `Err(AppError::BadRequest)` - Reservation is not confirmed
    /// - `Err(AppError::Conflict)` - A completion already exists
    pub async fn create(
        &self,
        user_id: &str,
        reservation_id: i32,
    ) -> Result<entity::rental_completion::Model, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if Party::of(user_id, &reservation.renter_id, &reservation.owner_id).is_none() {
            return Err(AppError::Forbidden(
                "Not authorized to complete this reservation".to_string(),
            ));
        }

        if reservation.status != ReservationStatus::Confirmed {
            return Err(AppError::BadRequest(
                "Only confirmed reservations can be completed".to_string(),
            ));
        }

        let repo = RentalCompletionRepository::new(self.db);
        if repo.find_by_reservation(reservation.id).await?.is_some() {
            return Err(AppError::Conflict(
                "Rental completion already exists for this reservation".to_string(),
            ));
        }

        Ok(repo.create(&reservation).await?)
    }

    /// Opens a completion for every confirmed reservation that ended before `today`
    /// and has none yet. Returns the number opened.
    pub async fn open_for_ended_reservations(&self, today: NaiveDate) -> Result<usize, AppError> {
        let ended = ReservationRepository::new(self.db)
            .confirmed_ended_before(today)
            .await?;

        let repo = RentalCompletionRepository::new(self.db);
        let existing = repo
            .reservation_ids_with_completion(ended.iter().map(|r| r.id).collect())
            .await?;

        let mut opened = 0;
        for reservation in ended.iter().filter(|r| !existing.contains(&r.id)) {
            repo.create(reservation).await?;
            opened += 1;
        }

        Ok(opened)
    }

    pub async fn get_by_id(
        &self,
        user_id: &str,
        id: i32,
    ) -> Result<RentalCompletionDetail, AppError> {
        let (completion, _) = find_as_participant(self.db, user_id, id).await?;

        let vitals = VehicleVitalsRepository::new(self.db)
            .list_by_completion(completion.id)
            .await?;
        let reviews = ReviewRepository::new(self.db)
            .list_by_completion(completion.id)
            .await?;

        Ok(RentalCompletionDetail {
            completion,
            vitals,
            reviews,
        })
    }

    pub async fn list_for_user(
        &self,
        user_id: &str,
        party: Party,
    ) -> Result<Vec<entity::rental_completion::Model>, AppError> {
        Ok(RentalCompletionRepository::new(self.db)
            .list_for_user(user_id, party, None)
            .await?)
    }

    /// Completions waiting on the caller: return forms as renter, confirmations as owner.
    pub async fn pending_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<entity::rental_completion::Model>, AppError> {
        let repo = RentalCompletionRepository::new(self.db);

        let mut pending = repo
            .list_for_user(user_id, Party::Renter, Some(CompletionStatus::PendingRenter))
            .await?;
        pending.extend(
            repo.list_for_user(user_id, Party::Owner, Some(CompletionStatus::PendingOwner))
                .await?,
        );
        pending.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(pending)
    }

    pub async fn submit_renter_return(
        &self,
        user_id: &str,
        id: i32,
        form: RenterReturnDto,
    ) -> Result<entity::rental_completion::Model, AppError> {
        let txn = self.db.begin().await?;
        let completion = find_for_step(&txn, user_id, id, Party::Renter).await?;

        let form = RenterReturnForm {
            return_date: form.return_date,
            vehicle_condition: form.vehicle_condition,
            fuel_level: form.fuel_level,
            mileage: form.mileage,
            notes: form.notes,
            photos: form.photos,
            submitted_at: Utc::now(),
        };

        let completion = RentalCompletionRepository::new(&txn)
            .save_renter_return(completion, form)
            .await?;

        txn.commit().await?;

        Ok(completion)
    }

    /// Closes the workflow and marks the reservation completed in one transaction.
    pub async fn submit_owner_review(
        &self,
        user_id: &str,
        id: i32,
        review: OwnerReviewDto,
    ) -> Result<entity::rental_completion::Model, AppError> {
        let txn = self.db.begin().await?;
        let completion = find_for_step(&txn, user_id, id, Party::Owner).await?;
        let reservation_id = completion.reservation_id;

        let owner_review = OwnerReturnReview {
            vehicle_received: review.vehicle_received,
            condition_matches: review.condition_matches,
            fuel_level_matches: review.fuel_level_matches,
            mileage_matches: review.mileage_matches,
            damage_reported: review.damage_reported,
            photos: review.photos,
            notes: review.notes,
            submitted_at: Utc::now(),
        };

        let completion = RentalCompletionRepository::new(&txn)
            .save_owner_review(completion, owner_review, review.completion_notes)
            .await?;

        let reservation_repo = ReservationRepository::new(&txn);
        if let Some(reservation) = reservation_repo.find_by_id(reservation_id).await? {
            reservation_repo
                .update_status(reservation, ReservationStatus::Completed, None, None)
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Rental completion {} closed for reservation {}",
            completion.id,
            reservation_id
        );

        Ok(completion)
    }

    pub async fn submit_vitals(
        &self,
        user_id: &str,
        id: i32,
        vitals: SubmitVitalsDto,
    ) -> Result<entity::vehicle_vitals::Model, AppError> {
        let (completion, _) = find_as_participant(self.db, user_id, id).await?;

        Ok(VehicleVitalsRepository::new(self.db)
            .create(&completion, user_id, vitals)
            .await?)
    }

    /// Records the caller's review of the other party and refreshes that party's rating.
    ///
    /// # Returns
    /// - `Ok(review)` - The public review
    /// - `Err(AppError::BadRequest)` - A rating outside 1 to 5
    /// - `Err(AppError::Conflict)` - The caller already reviewed this rental
    pub async fn submit_review(
        &self,
        user_id: &str,
        id: i32,
        review: SubmitReviewDto,
    ) -> Result<entity::rental_review::Model, AppError> {
        let (completion, party) = find_as_participant(self.db, user_id, id).await?;

        let ratings = [
            Some(review.rating),
            review.communication,
            review.vehicle_condition,
            review.professionalism,
            review.overall_experience,
        ];
        if !ratings.into_iter().flatten().all(is_valid_rating) {
            return Err(AppError::BadRequest(
                "Ratings must be between 1 and 5".to_string(),
            ));
        }

        let repo = ReviewRepository::new(self.db);
        if repo.find_by_reviewer(completion.id, user_id).await?.is_some() {
            return Err(AppError::Conflict(
                "You have already reviewed this rental".to_string(),
            ));
        }

        let (reviewed_id, review_type) = match party {
            Party::Renter => (completion.owner_id.clone(), ReviewType::RenterToOwner),
            Party::Owner => (completion.renter_id.clone(), ReviewType::OwnerToRenter),
        };

        let created = repo
            .create(&completion, user_id, &reviewed_id, review_type, review)
            .await?;

        UserService::new(self.db).update_rating(&reviewed_id).await?;

        Ok(created)
    }
}
