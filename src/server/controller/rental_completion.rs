//! Post-rental handover: return form, owner inspection, vitals and mutual reviews.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        rental_completion::{
            CreateRentalCompletionDto, OwnerReviewDto, RentalCompletionDetailDto,
            RentalCompletionDto, RenterReturnDto, SubmitVitalsDto, VehicleVitalsDto,
        },
        review::{ReviewDto, SubmitReviewDto},
    },
    server::{
        controller::{into_dtos, reservation::RoleQuery},
        error::AppError,
        middleware::auth::AuthGuard,
        service::rental_completion::RentalCompletionService,
        state::AppState,
    },
};

pub static RENTAL_COMPLETION_TAG: &str = "rental_completion";

/// Opens the completion flow for a confirmed reservation.
///
/// Returns the existing completion when one was already opened.
#[utoipa::path(
    post,
    path = "/api/rental-completions",
    tag = RENTAL_COMPLETION_TAG,
    request_body = CreateRentalCompletionDto,
    responses(
        (status = 201, description = "Rental completion", body = RentalCompletionDto),
        (status = 400, description = "Reservation is not confirmed", body = ErrorDto),
        (status = 403, description = "Caller is not a party to the reservation", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto)
    ),
)]
pub async fn create_completion(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRentalCompletionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let completion = RentalCompletionService::new(&state.db)
        .create(&user.external_id, payload.reservation_id)
        .await?;

    Ok((StatusCode::CREATED, Json(RentalCompletionDto::from(completion))))
}

#[utoipa::path(
    get,
    path = "/api/rental-completions",
    tag = RENTAL_COMPLETION_TAG,
    params(("role" = Option<String>, Query, description = "renter (default) or owner")),
    responses(
        (status = 200, description = "Rental completions", body = Vec<RentalCompletionDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_completions(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RoleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let completions = RentalCompletionService::new(&state.db)
        .list_for_user(&user.external_id, query.role)
        .await?;

    Ok((
        StatusCode::OK,
        Json(into_dtos::<_, RentalCompletionDto>(completions)),
    ))
}

/// Completions waiting on the caller: return forms as renter, inspections as owner.
#[utoipa::path(
    get,
    path = "/api/rental-completions/pending",
    tag = RENTAL_COMPLETION_TAG,
    responses(
        (status = 200, description = "Completions awaiting the caller", body = Vec<RentalCompletionDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_pending_completions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let completions = RentalCompletionService::new(&state.db)
        .pending_for_user(&user.external_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(into_dtos::<_, RentalCompletionDto>(completions)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/rental-completions/{id}",
    tag = RENTAL_COMPLETION_TAG,
    params(("id" = i32, Path, description = "Rental completion id")),
    responses(
        (status = 200, description = "Completion with vitals and reviews", body = RentalCompletionDetailDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 404, description = "Rental completion not found", body = ErrorDto)
    ),
)]
pub async fn get_completion(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let detail = RentalCompletionService::new(&state.db)
        .get_by_id(&user.external_id, id)
        .await?;

    Ok((StatusCode::OK, Json(RentalCompletionDetailDto::from(detail))))
}

/// Renter's return form. Moves the completion on to the owner's inspection.
#[utoipa::path(
    post,
    path = "/api/rental-completions/{id}/renter-return",
    tag = RENTAL_COMPLETION_TAG,
    params(("id" = i32, Path, description = "Rental completion id")),
    request_body = RenterReturnDto,
    responses(
        (status = 200, description = "Updated completion", body = RentalCompletionDto),
        (status = 400, description = "Completion is not awaiting the renter", body = ErrorDto),
        (status = 403, description = "Caller is not the renter", body = ErrorDto)
    ),
)]
pub async fn submit_renter_return(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<RenterReturnDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let completion = RentalCompletionService::new(&state.db)
        .submit_renter_return(&user.external_id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(RentalCompletionDto::from(completion))))
}

/// Owner's inspection. Completes the rental and its reservation.
#[utoipa::path(
    post,
    path = "/api/rental-completions/{id}/owner-review",
    tag = RENTAL_COMPLETION_TAG,
    params(("id" = i32, Path, description = "Rental completion id")),
    request_body = OwnerReviewDto,
    responses(
        (status = 200, description = "Completed rental", body = RentalCompletionDto),
        (status = 400, description = "Completion is not awaiting the owner", body = ErrorDto),
        (status = 403, description = "Caller is not the owner", body = ErrorDto)
    ),
)]
pub async fn submit_owner_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<OwnerReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let completion = RentalCompletionService::new(&state.db)
        .submit_owner_review(&user.external_id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(RentalCompletionDto::from(completion))))
}

#[utoipa::path(
    post,
    path = "/api/rental-completions/{id}/vitals",
    tag = RENTAL_COMPLETION_TAG,
    params(("id" = i32, Path, description = "Rental completion id")),
    request_body = SubmitVitalsDto,
    responses(
        (status = 201, description = "Recorded vitals", body = VehicleVitalsDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 404, description = "Rental completion not found", body = ErrorDto)
    ),
)]
pub async fn submit_vitals(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SubmitVitalsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let vitals = RentalCompletionService::new(&state.db)
        .submit_vitals(&user.external_id, id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(VehicleVitalsDto::from(vitals))))
}

/// Reviews the other party of a completed rental. One review per side.
#[utoipa::path(
    post,
    path = "/api/rental-completions/{id}/review",
    tag = RENTAL_COMPLETION_TAG,
    params(("id" = i32, Path, description = "Rental completion id")),
    request_body = SubmitReviewDto,
    responses(
        (status = 201, description = "Submitted review", body = ReviewDto),
        (status = 400, description = "Rental not completed or invalid rating", body = ErrorDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 409, description = "Caller already reviewed this rental", body = ErrorDto)
    ),
)]
pub async fn submit_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SubmitReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let review = RentalCompletionService::new(&state.db)
        .submit_review(&user.external_id, id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(ReviewDto::from(review))))
}
