//! Review statistics and conversions.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::model::{
    review::{
        CategoryAveragesDto, ReviewDto, ReviewPageDto, ReviewStatsDto, ReviewWithReviewerDto,
    },
    user::UserSummaryDto,
};

/// Which side of a review a user is on when listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewRole {
    /// Reviews the user received.
    #[default]
    Reviewed,
    /// Reviews the user wrote.
    Reviewer,
}

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of the ratings rounded to one decimal, `None` when empty.
pub fn average_rating(ratings: &[i32]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
    Some(round1(sum as f64 / ratings.len() as f64))
}

fn category_average<F>(reviews: &[entity::rental_review::Model], field: F) -> Option<f64>
where
    F: Fn(&entity::rental_review::Model) -> Option<i32>,
{
    let values: Vec<i32> = reviews.iter().filter_map(field).collect();
    average_rating(&values)
}

/// Aggregate over a set of reviews.
pub fn review_stats(reviews: &[entity::rental_review::Model]) -> ReviewStatsDto {
    let ratings: Vec<i32> = reviews.iter().map(|r| r.rating).collect();

    let mut rating_breakdown: BTreeMap<i32, u64> = (1..=5).map(|star| (star, 0)).collect();
    for rating in &ratings {
        if let Some(count) = rating_breakdown.get_mut(rating) {
            *count += 1;
        }
    }

    ReviewStatsDto {
        total_reviews: reviews.len() as u64,
        average_rating: average_rating(&ratings).unwrap_or(0.0),
        rating_breakdown,
        category_averages: CategoryAveragesDto {
            communication: category_average(reviews, |r| r.communication),
            vehicle_condition: category_average(reviews, |r| r.vehicle_condition),
            professionalism: category_average(reviews, |r| r.professionalism),
            overall_experience: category_average(reviews, |r| r.overall_experience),
        },
    }
}

/// Ratings must be whole stars from 1 to 5.
pub fn is_valid_rating(rating: i32) -> bool {
    (1..=5).contains(&rating)
}

impl From<entity::rental_review::Model> for ReviewDto {
    fn from(r: entity::rental_review::Model) -> Self {
        Self {
            id: r.id,
            rental_completion_id: r.rental_completion_id,
            reservation_id: r.reservation_id,
            vehicle_id: r.vehicle_id,
            reviewer_id: r.reviewer_id,
            reviewed_id: r.reviewed_id,
            review_type: r.review_type,
            rating: r.rating,
            communication: r.communication,
            vehicle_condition: r.vehicle_condition,
            professionalism: r.professionalism,
            overall_experience: r.overall_experience,
            title: r.title,
            content: r.content,
            photos: r.photos.0,
            response: r.response,
            is_public: r.is_public,
            created_at: r.created_at,
        }
    }
}

impl From<(entity::rental_review::Model, Option<entity::user::Model>)> for ReviewWithReviewerDto {
    fn from((review, reviewer): (entity::rental_review::Model, Option<entity::user::Model>)) -> Self {
        Self {
            review: review.into(),
            reviewer: reviewer.map(UserSummaryDto::from),
        }
    }
}

/// Review paired with the profile of whoever wrote it.
pub type ReviewWithReviewer = (entity::rental_review::Model, Option<entity::user::Model>);

/// One cursor page of a vehicle's reviews.
#[derive(Debug, Clone)]
pub struct ReviewPage {
    pub reviews: Vec<ReviewWithReviewer>,
    pub has_more: bool,
    pub next_cursor: Option<i32>,
}

impl From<ReviewPage> for ReviewPageDto {
    fn from(page: ReviewPage) -> Self {
        Self {
            reviews: page
                .reviews
                .into_iter()
                .map(ReviewWithReviewerDto::from)
                .collect(),
            has_more: page.has_more,
            next_cursor: page.next_cursor,
        }
    }
}
