//! Rental review repository.

use chrono::Utc;
use entity::{
    json::{ReviewResponse, StringList},
    sea_orm_active_enums::ReviewType,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{model::review::SubmitReviewDto, server::model::review::ReviewRole};

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a public review of `reviewed_id` for the completion.
    pub async fn create(
        &self,
        completion: &entity::rental_completion::Model,
        reviewer_id: &str,
        reviewed_id: &str,
        review_type: ReviewType,
        review: SubmitReviewDto,
    ) -> Result<entity::rental_review::Model, DbErr> {
        let now = Utc::now();
        entity::rental_review::ActiveModel {
            rental_completion_id: ActiveValue::Set(completion.id),
            reservation_id: ActiveValue::Set(completion.reservation_id),
            vehicle_id: ActiveValue::Set(completion.vehicle_id),
            reviewer_id: ActiveValue::Set(reviewer_id.to_string()),
            reviewed_id: ActiveValue::Set(reviewed_id.to_string()),
            review_type: ActiveValue::Set(review_type),
            rating: ActiveValue::Set(review.rating),
            communication: ActiveValue::Set(review.communication),
            vehicle_condition: ActiveValue::Set(review.vehicle_condition),
            professionalism: ActiveValue::Set(review.professionalism),
            overall_experience: ActiveValue::Set(review.overall_experience),
            title: ActiveValue::Set(review.title),
            content: ActiveValue::Set(review.content),
            photos: ActiveValue::Set(StringList(review.photos)),
            response: ActiveValue::Set(None),
            is_public: ActiveValue::Set(true),
            is_moderated: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::rental_review::Model>, DbErr> {
        entity::prelude::RentalReview::find_by_id(id)
            .one(self.db)
            .await
    }

    /// The review `reviewer_id` left on a completion, if any.
    pub async fn find_by_reviewer(
        &self,
        rental_completion_id: i32,
        reviewer_id: &str,
    ) -> Result<Option<entity::rental_review::Model>, DbErr> {
        entity::prelude::RentalReview::find()
            .filter(entity::rental_review::Column::RentalCompletionId.eq(rental_completion_id))
            .filter(entity::rental_review::Column::ReviewerId.eq(reviewer_id))
            .one(self.db)
            .await
    }

    pub async fn list_by_completion(
        &self,
        rental_completion_id: i32,
    ) -> Result<Vec<entity::rental_review::Model>, DbErr> {
        entity::prelude::RentalReview::find()
            .filter(entity::rental_review::Column::RentalCompletionId.eq(rental_completion_id))
            .order_by_asc(entity::rental_review::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Public reviews the user received or wrote, newest first.
    pub async fn list_public_for_user(
        &self,
        user_id: &str,
        role: ReviewRole,
    ) -> Result<Vec<entity::rental_review::Model>, DbErr> {
        let column = match role {
            ReviewRole::Reviewed => entity::rental_review::Column::ReviewedId,
            ReviewRole::Reviewer => entity::rental_review::Column::ReviewerId,
        };

        entity::prelude::RentalReview::find()
            .filter(column.eq(user_id))
            .filter(entity::rental_review::Column::IsPublic.eq(true))
            .order_by_desc(entity::rental_review::Column::CreatedAt)
            .order_by_desc(entity::rental_review::Column::Id)
            .all(self.db)
            .await
    }

    /// Public renter reviews of a vehicle, newest first.
    pub async fn list_public_for_vehicle(
        &self,
        vehicle_id: i32,
    ) -> Result<Vec<entity::rental_review::Model>, DbErr> {
        entity::prelude::RentalReview::find()
            .filter(entity::rental_review::Column::VehicleId.eq(vehicle_id))
            .filter(entity::rental_review::Column::ReviewType.eq(ReviewType::RenterToOwner))
            .filter(entity::rental_review::Column::IsPublic.eq(true))
            .order_by_desc(entity::rental_review::Column::Id)
            .all(self.db)
            .await
    }

    /// Up to `limit` public renter reviews of a vehicle with ids below `cursor`, newest first.
    pub async fn page_for_vehicle(
        &self,
        vehicle_id: i32,
        cursor: Option<i32>,
        limit: u64,
    ) -> Result<Vec<entity::rental_review::Model>, DbErr> {
        let mut query = entity::prelude::RentalReview::find()
            .filter(entity::rental_review::Column::VehicleId.eq(vehicle_id))
            .filter(entity::rental_review::Column::ReviewType.eq(ReviewType::RenterToOwner))
            .filter(entity::rental_review::Column::IsPublic.eq(true));

        if let Some(cursor) = cursor {
            query = query.filter(entity::rental_review::Column::Id.lt(cursor));
        }

        query
            .order_by_desc(entity::rental_review::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Reviews the user received that have no response yet, newest first.
    pub async fn list_awaiting_response(
        &self,
        reviewed_id: &str,
    ) -> Result<Vec<entity::rental_review::Model>, DbErr> {
        let reviews = entity::prelude::RentalReview::find()
            .filter(entity::rental_review::Column::ReviewedId.eq(reviewed_id))
            .order_by_desc(entity::rental_review::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(reviews.into_iter().filter(|r| r.response.is_none()).collect())
    }

    pub async fn set_response(
        &self,
        review: entity::rental_review::Model,
        text: String,
    ) -> Result<entity::rental_review::Model, DbErr> {
        let now = Utc::now();
        let mut active = review.into_active_model();
        active.response = ActiveValue::Set(Some(ReviewResponse {
            text,
            responded_at: now,
        }));
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::RentalReview::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
