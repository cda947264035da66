use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        review::{ReviewDto, ReviewPageDto, ReviewStatsDto, ReviewWithReviewerDto, RespondToReviewDto},
    },
    server::{
        controller::into_dtos, error::AppError, middleware::auth::AuthGuard,
        model::review::ReviewRole, service::review::ReviewService, state::AppState,
    },
};

pub static REVIEW_TAG: &str = "review";

#[derive(Deserialize)]
pub struct ReviewRoleQuery {
    #[serde(default)]
    pub role: ReviewRole,
}

#[derive(Deserialize)]
pub struct ReviewPageQuery {
    pub limit: Option<u64>,
    pub cursor: Option<i32>,
}

/// Public reviews the caller received, or wrote with `role=reviewer`.
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    params(("role" = Option<String>, Query, description = "reviewed (default) or reviewer")),
    responses(
        (status = 200, description = "Reviews", body = Vec<ReviewWithReviewerDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_my_reviews(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ReviewRoleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reviews = ReviewService::new(&state.db)
        .list_for_user(&user.external_id, query.role)
        .await?;

    Ok((
        StatusCode::OK,
        Json(into_dtos::<_, ReviewWithReviewerDto>(reviews)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/vehicles/{id}/reviews",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Renter reviews of the vehicle", body = Vec<ReviewWithReviewerDto>)
    ),
)]
pub async fn list_vehicle_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db).list_for_vehicle(id).await?;

    Ok((
        StatusCode::OK,
        Json(into_dtos::<_, ReviewWithReviewerDto>(reviews)),
    ))
}

/// Cursor paginated vehicle reviews.
///
/// Pass the `next_cursor` of a page as `cursor` to fetch the following one.
#[utoipa::path(
    get,
    path = "/api/vehicles/{id}/reviews/page",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id"),
        ("limit" = Option<u64>, Query, description = "Page size (default 10, at most 100)"),
        ("cursor" = Option<i32>, Query, description = "Id of the last review of the previous page")
    ),
    responses(
        (status = 200, description = "Page of reviews", body = ReviewPageDto)
    ),
)]
pub async fn list_vehicle_reviews_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<ReviewPageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = ReviewService::new(&state.db)
        .list_for_vehicle_paginated(id, query.limit, query.cursor)
        .await?;

    Ok((StatusCode::OK, Json(ReviewPageDto::from(page))))
}

#[utoipa::path(
    get,
    path = "/api/vehicles/{id}/reviews/stats",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Rating statistics", body = ReviewStatsDto)
    ),
)]
pub async fn get_vehicle_review_stats(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let stats = ReviewService::new(&state.db).vehicle_stats(id).await?;

    Ok((StatusCode::OK, Json(stats)))
}

#[utoipa::path(
    get,
    path = "/api/users/{external_id}/review-stats",
    tag = REVIEW_TAG,
    params(("external_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Rating statistics", body = ReviewStatsDto)
    ),
)]
pub async fn get_user_review_stats(
    State(state): State<AppState>,
    Path(external_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let stats = ReviewService::new(&state.db)
        .user_stats(&external_id)
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Reviews of the caller that have no response yet.
#[utoipa::path(
    get,
    path = "/api/reviews/pending-responses",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Reviews awaiting a response", body = Vec<ReviewWithReviewerDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_pending_responses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reviews = ReviewService::new(&state.db)
        .pending_responses(&user.external_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(into_dtos::<_, ReviewWithReviewerDto>(reviews)),
    ))
}

/// Public response from the reviewed party. Only one response is allowed.
#[utoipa::path(
    post,
    path = "/api/reviews/{id}/respond",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review id")),
    request_body = RespondToReviewDto,
    responses(
        (status = 200, description = "Review with response", body = ReviewDto),
        (status = 400, description = "Empty response", body = ErrorDto),
        (status = 403, description = "Caller is not the reviewed party", body = ErrorDto),
        (status = 409, description = "Review already has a response", body = ErrorDto)
    ),
)]
pub async fn respond_to_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<RespondToReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let review = ReviewService::new(&state.db)
        .respond(&user.external_id, id, payload.text)
        .await?;

    Ok((StatusCode::OK, Json(ReviewDto::from(review))))
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review deleted", body = SuccessDto),
        (status = 403, description = "Caller is not the reviewer", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ReviewService::new(&state.db)
        .delete(&user.external_id, id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}
