//! Public review listings, statistics and responses.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::review::ReviewStatsDto,
    server::{
        data::{review::ReviewRepository, user::UserRepository},
        error::AppError,
        model::{
            page::page_size,
            review::{review_stats, ReviewPage, ReviewRole, ReviewWithReviewer},
        },
        service::user::UserService,
    },
};

pub const DEFAULT_PAGE_SIZE: u64 = 10;

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_for_user(
        &self,
        user_id: &str,
        role: ReviewRole,
    ) -> Result<Vec<ReviewWithReviewer>, AppError> {
        let reviews = ReviewRepository::new(self.db)
            .list_public_for_user(user_id, role)
            .await?;

        self.with_reviewers(reviews).await
    }

    pub async fn list_for_vehicle(
        &self,
        vehicle_id: i32,
    ) -> Result<Vec<ReviewWithReviewer>, AppError> {
        let reviews = ReviewRepository::new(self.db)
            .list_public_for_vehicle(vehicle_id)
            .await?;

        self.with_reviewers(reviews).await
    }

    /// One page of a vehicle's reviews, newest first.
    ///
    /// Fetches one row past `limit` to learn whether another page exists. The cursor is the
    /// id of the last review returned.
    pub async fn list_for_vehicle_paginated(
        &self,
        vehicle_id: i32,
        limit: Option<u64>,
        cursor: Option<i32>,
    ) -> Result<ReviewPage, AppError> {
        let limit = page_size(limit, DEFAULT_PAGE_SIZE);

        let mut reviews = ReviewRepository::new(self.db)
            .page_for_vehicle(vehicle_id, cursor, limit + 1)
            .await?;

        let has_more = reviews.len() as u64 > limit;
        reviews.truncate(limit as usize);
        let next_cursor = if has_more {
            reviews.last().map(|r| r.id)
        } else {
            None
        };

        Ok(ReviewPage {
            reviews: self.with_reviewers(reviews).await?,
            has_more,
            next_cursor,
        })
    }

    pub async fn user_stats(&self, user_id: &str) -> Result<ReviewStatsDto, AppError> {
        let reviews = ReviewRepository::new(self.db)
            .list_public_for_user(user_id, ReviewRole::Reviewed)
            .await?;

        Ok(review_stats(&reviews))
    }

    pub async fn vehicle_stats(&self, vehicle_id: i32) -> Result<ReviewStatsDto, AppError> {
        let reviews = ReviewRepository::new(self.db)
            .list_public_for_vehicle(vehicle_id)
            .await?;

        Ok(review_stats(&reviews))
    }

    /// Attaches the reviewed party's single response to a review.
    ///
    /// # Returns
    /// - `Ok(review)` - Review with the response set
    /// - `Err(AppError::NotFound)` - Review does not exist
    /// - `Err(AppError::Forbidden)` - Caller is not the reviewed party
    /// - `Err(AppError::Conflict)` - Review already has a response
    pub async fn respond(
        &self,
        user_id: &str,
        review_id: i32,
        text: String,
    ) -> Result<entity::rental_review::Model, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::BadRequest("Response text is required".to_string()));
        }

        let repo = ReviewRepository::new(self.db);
        let review = self.find(&repo, review_id).await?;

        if review.reviewed_id != user_id {
            return Err(AppError::Forbidden(
                "Only the reviewed user can respond".to_string(),
            ));
        }
        if review.response.is_some() {
            return Err(AppError::Conflict(
                "Review already has a response".to_string(),
            ));
        }

        Ok(repo.set_response(review, text).await?)
    }

    pub async fn pending_responses(
        &self,
        user_id: &str,
    ) -> Result<Vec<ReviewWithReviewer>, AppError> {
        let reviews = ReviewRepository::new(self.db)
            .list_awaiting_response(user_id)
            .await?;

        self.with_reviewers(reviews).await
    }

    /// Deletes the caller's review and recomputes the reviewed user's rating.
    pub async fn delete(&self, user_id: &str, review_id: i32) -> Result<(), AppError> {
        let repo = ReviewRepository::new(self.db);
        let review = self.find(&repo, review_id).await?;

        if review.reviewer_id != user_id {
            return Err(AppError::Forbidden(
                "Only the reviewer can delete this review".to_string(),
            ));
        }

        repo.delete(review.id).await?;
        UserService::new(self.db)
            .update_rating(&review.reviewed_id)
            .await?;

        Ok(())
    }

    async fn find(
        &self,
        repo: &ReviewRepository<'_, DatabaseConnection>,
        id: i32,
    ) -> Result<entity::rental_review::Model, AppError> {
        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))
    }

    async fn with_reviewers(
        &self,
        reviews: Vec<entity::rental_review::Model>,
    ) -> Result<Vec<ReviewWithReviewer>, AppError> {
        let mut ids: Vec<String> = reviews.iter().map(|r| r.reviewer_id.clone()).collect();
        ids.sort();
        ids.dedup();

        let users: HashMap<String, entity::user::Model> = UserRepository::new(self.db)
            .find_many_by_external_ids(ids)
            .await?
            .into_iter()
            .map(|u| (u.external_id.clone(), u))
            .collect();

        Ok(reviews
            .into_iter()
            .map(|review| {
                let reviewer = users.get(&review.reviewer_id).cloned();
                (review, reviewer)
            })
            .collect())
    }
}
