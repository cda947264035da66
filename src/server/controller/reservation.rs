use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::ReservationStatus;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        reservation::{
            CancelReservationDto, CreateReservationDto, ReservationDto, RespondToReservationDto,
        },
    },
    server::{
        controller::into_dtos, error::AppError, middleware::auth::AuthGuard,
        model::party::Party, service::reservation::ReservationService, state::AppState,
    },
};

pub static RESERVATION_TAG: &str = "reservation";

#[derive(Deserialize)]
pub struct ReservationListQuery {
    #[serde(default)]
    pub role: Party,
    pub status: Option<ReservationStatus>,
}

#[derive(Deserialize)]
pub struct RoleQuery {
    #[serde(default)]
    pub role: Party,
}

/// Requests a booking of a vehicle for a date range.
///
/// The vehicle must be listed, the caller must not own it and every date in the range
/// must be free of blocks and active reservations. The daily rate and total are taken
/// from the vehicle at request time.
///
/// # Returns
/// - `201 Created` - The pending reservation
/// - `400 Bad Request` - Invalid range, own vehicle or dates unavailable
/// - `404 Not Found` - Vehicle missing or unlisted
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Created reservation", body = ReservationDto),
        (status = 400, description = "Reservation cannot be made", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db)
        .create(&user.external_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(ReservationDto::from(reservation))))
}

/// The caller's reservations as renter or as owner, optionally filtered by status.
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    params(
        ("role" = Option<String>, Query, description = "renter (default) or owner"),
        ("status" = Option<String>, Query, description = "Only reservations with this status")
    ),
    responses(
        (status = 200, description = "Reservations", body = Vec<ReservationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_reservations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ReservationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservations = ReservationService::new(&state.db)
        .list_for_user(&user.external_id, query.role, query.status)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, ReservationDto>(reservations))))
}

/// Requests on the caller's vehicles still waiting for an answer.
#[utoipa::path(
    get,
    path = "/api/reservations/pending",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "Pending reservations", body = Vec<ReservationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_pending(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservations = ReservationService::new(&state.db)
        .pending_for_owner(&user.external_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, ReservationDto>(reservations))))
}

#[utoipa::path(
    get,
    path = "/api/reservations/confirmed",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "Confirmed reservations", body = Vec<ReservationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_confirmed(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservations = ReservationService::new(&state.db)
        .confirmed_for_owner(&user.external_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, ReservationDto>(reservations))))
}

#[utoipa::path(
    get,
    path = "/api/reservations/upcoming",
    tag = RESERVATION_TAG,
    params(("role" = Option<String>, Query, description = "renter (default) or owner")),
    responses(
        (status = 200, description = "Upcoming confirmed reservations", body = Vec<ReservationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_upcoming(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RoleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservations = ReservationService::new(&state.db)
        .upcoming(&user.external_id, query.role)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, ReservationDto>(reservations))))
}

#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation id")),
    responses(
        (status = 200, description = "Reservation", body = ReservationDto),
        (status = 403, description = "Caller is not a party to the reservation", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db)
        .get_by_id(&user, id)
        .await?;

    Ok((StatusCode::OK, Json(ReservationDto::from(reservation))))
}

/// Owner accepts a pending request.
#[utoipa::path(
    post,
    path = "/api/reservations/{id}/approve",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation id")),
    request_body = RespondToReservationDto,
    responses(
        (status = 200, description = "Approved reservation", body = ReservationDto),
        (status = 400, description = "Reservation is not pending", body = ErrorDto),
        (status = 403, description = "Caller is not the owner", body = ErrorDto)
    ),
)]
pub async fn approve_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<RespondToReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db)
        .approve(&user.external_id, id, payload.owner_message)
        .await?;

    Ok((StatusCode::OK, Json(ReservationDto::from(reservation))))
}

/// Owner turns down a pending request.
#[utoipa::path(
    post,
    path = "/api/reservations/{id}/decline",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation id")),
    request_body = RespondToReservationDto,
    responses(
        (status = 200, description = "Declined reservation", body = ReservationDto),
        (status = 400, description = "Reservation is not pending", body = ErrorDto),
        (status = 403, description = "Caller is not the owner", body = ErrorDto)
    ),
)]
pub async fn decline_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<RespondToReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db)
        .decline(&user.external_id, id, payload.owner_message)
        .await?;

    Ok((StatusCode::OK, Json(ReservationDto::from(reservation))))
}

/// Either party cancels a pending or confirmed reservation.
#[utoipa::path(
    post,
    path = "/api/reservations/{id}/cancel",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation id")),
    request_body = CancelReservationDto,
    responses(
        (status = 200, description = "Cancelled reservation", body = ReservationDto),
        (status = 400, description = "Reservation can no longer be cancelled", body = ErrorDto),
        (status = 403, description = "Caller is not a party to the reservation", body = ErrorDto)
    ),
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CancelReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db)
        .cancel(&user.external_id, id, payload.reason)
        .await?;

    Ok((StatusCode::OK, Json(ReservationDto::from(reservation))))
}

#[utoipa::path(
    post,
    path = "/api/reservations/{id}/complete",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation id")),
    responses(
        (status = 200, description = "Completed reservation", body = ReservationDto),
        (status = 400, description = "Reservation is not confirmed", body = ErrorDto),
        (status = 403, description = "Caller is not the owner", body = ErrorDto)
    ),
)]
pub async fn complete_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db)
        .complete(&user.external_id, id)
        .await?;

    Ok((StatusCode::OK, Json(ReservationDto::from(reservation))))
}
