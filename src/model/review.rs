use chrono::{DateTime, Utc};
use entity::{json::ReviewResponse, sea_orm_active_enums::ReviewType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub rental_completion_id: i32,
    pub reservation_id: i32,
    pub vehicle_id: i32,
    pub reviewer_id: String,
    pub reviewed_id: String,
    #[schema(value_type = String)]
    pub review_type: ReviewType,
    pub rating: i32,
    pub communication: Option<i32>,
    pub vehicle_condition: Option<i32>,
    pub professionalism: Option<i32>,
    pub overall_experience: Option<i32>,
    pub title: String,
    pub content: String,
    pub photos: Vec<String>,
    #[schema(value_type = Option<Object>)]
    pub response: Option<ReviewResponse>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

/// Review with the reviewer's public profile attached.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ReviewWithReviewerDto {
    #[serde(flatten)]
    pub review: ReviewDto,
    pub reviewer: Option<UserSummaryDto>,
}

/// One page of a vehicle's reviews. Pass `next_cursor` back to fetch the next page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ReviewPageDto {
    pub reviews: Vec<ReviewWithReviewerDto>,
    pub has_more: bool,
    pub next_cursor: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CategoryAveragesDto {
    pub communication: Option<f64>,
    pub vehicle_condition: Option<f64>,
    pub professionalism: Option<f64>,
    pub overall_experience: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ReviewStatsDto {
    pub total_reviews: u64,
    /// Mean rating rounded to one decimal, zero when there are no reviews.
    pub average_rating: f64,
    /// Count of reviews per star rating, keys 1 to 5.
    pub rating_breakdown: BTreeMap<i32, u64>,
    pub category_averages: CategoryAveragesDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SubmitReviewDto {
    pub rating: i32,
    pub communication: Option<i32>,
    pub vehicle_condition: Option<i32>,
    pub professionalism: Option<i32>,
    pub overall_experience: Option<i32>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub photos: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RespondToReviewDto {
    pub text: String,
}
