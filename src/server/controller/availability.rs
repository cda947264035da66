use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        availability::{
            AvailabilityCheckDto, AvailabilityDto, BlockDateDto, BlockRangeDto, CalendarDto,
            DateRangeDto, SetDefaultAvailabilityDto,
        },
    },
    server::{
        controller::into_dtos, error::AppError, middleware::auth::AuthGuard,
        service::availability::AvailabilityService, state::AppState,
    },
};

pub static AVAILABILITY_TAG: &str = "availability";

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct CalendarQuery {
    pub year: i32,
    pub month: u32,
}

/// Availability rows of a vehicle ordered by date, optionally within a range.
#[utoipa::path(
    get,
    path = "/api/vehicles/{id}/availability",
    tag = AVAILABILITY_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id"),
        ("start_date" = Option<String>, Query, description = "First date, YYYY-MM-DD"),
        ("end_date" = Option<String>, Query, description = "Last date, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Availability rows", body = Vec<AvailabilityDto>)
    ),
)]
pub async fn get_availability(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = AvailabilityService::new(&state.db)
        .get_by_vehicle(id, query.start_date, query.end_date)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, AvailabilityDto>(rows))))
}

/// Whether a date range can be booked.
///
/// Applies the same rules as reservation creation and reports what blocks the range.
///
/// # Returns
/// - `200 OK` - Availability with blocked dates and conflicting reservations
/// - `400 Bad Request` - End date not after start date
/// - `404 Not Found` - Vehicle missing
#[utoipa::path(
    get,
    path = "/api/vehicles/{id}/availability/check",
    tag = AVAILABILITY_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id"),
        ("start_date" = String, Query, description = "First day, YYYY-MM-DD"),
        ("end_date" = String, Query, description = "Last day, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Availability of the range", body = AvailabilityCheckDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto)
    ),
)]
pub async fn check_availability(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(range): Query<DateRangeDto>,
) -> Result<impl IntoResponse, AppError> {
    let check = AvailabilityService::new(&state.db)
        .check(id, range.start_date, range.end_date)
        .await?;

    Ok((StatusCode::OK, Json(AvailabilityCheckDto::from(check))))
}

#[utoipa::path(
    get,
    path = "/api/vehicles/{id}/availability/calendar",
    tag = AVAILABILITY_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id"),
        ("year" = i32, Query, description = "Calendar year"),
        ("month" = u32, Query, description = "Month, 1 to 12")
    ),
    responses(
        (status = 200, description = "Month calendar", body = CalendarDto),
        (status = 400, description = "Invalid month", body = ErrorDto)
    ),
)]
pub async fn get_calendar(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<CalendarQuery>,
) -> Result<impl IntoResponse, AppError> {
    let calendar = AvailabilityService::new(&state.db)
        .calendar(id, query.year, query.month)
        .await?;

    Ok((StatusCode::OK, Json(CalendarDto::from(calendar))))
}

/// Marks one date unavailable, optionally with a reason and a special price.
///
/// # Access Control
/// - Vehicle owner only
#[utoipa::path(
    post,
    path = "/api/vehicles/{id}/availability/block",
    tag = AVAILABILITY_TAG,
    params(("id" = i32, Path, description = "Vehicle id")),
    request_body = BlockDateDto,
    responses(
        (status = 200, description = "Blocked date", body = AvailabilityDto),
        (status = 403, description = "Caller does not own the vehicle", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto)
    ),
)]
pub async fn block_date(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<BlockDateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let row = AvailabilityService::new(&state.db)
        .block_date(&user.external_id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(AvailabilityDto::from(row))))
}

#[utoipa::path(
    post,
    path = "/api/vehicles/{id}/availability/block-range",
    tag = AVAILABILITY_TAG,
    params(("id" = i32, Path, description = "Vehicle id")),
    request_body = BlockRangeDto,
    responses(
        (status = 200, description = "Blocked dates", body = Vec<AvailabilityDto>),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 403, description = "Caller does not own the vehicle", body = ErrorDto)
    ),
)]
pub async fn block_range(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<BlockRangeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rows = AvailabilityService::new(&state.db)
        .block_range(&user.external_id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, AvailabilityDto>(rows))))
}

#[utoipa::path(
    delete,
    path = "/api/vehicles/{id}/availability/{date}",
    tag = AVAILABILITY_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id"),
        ("date" = String, Path, description = "Date to unblock, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Date unblocked", body = SuccessDto),
        (status = 403, description = "Caller does not own the vehicle", body = ErrorDto)
    ),
)]
pub async fn unblock_date(
    State(state): State<AppState>,
    session: Session,
    Path((id, date)): Path<(i32, NaiveDate)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AvailabilityService::new(&state.db)
        .unblock_date(&user.external_id, id, date)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

#[utoipa::path(
    post,
    path = "/api/vehicles/{id}/availability/unblock-range",
    tag = AVAILABILITY_TAG,
    params(("id" = i32, Path, description = "Vehicle id")),
    request_body = DateRangeDto,
    responses(
        (status = 200, description = "Dates unblocked", body = SuccessDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 403, description = "Caller does not own the vehicle", body = ErrorDto)
    ),
)]
pub async fn unblock_range(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<DateRangeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AvailabilityService::new(&state.db)
        .unblock_range(&user.external_id, id, payload.start_date, payload.end_date)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// Writes the same availability flag to every date of a range.
#[utoipa::path(
    put,
    path = "/api/vehicles/{id}/availability/default",
    tag = AVAILABILITY_TAG,
    params(("id" = i32, Path, description = "Vehicle id")),
    request_body = SetDefaultAvailabilityDto,
    responses(
        (status = 200, description = "Written rows", body = Vec<AvailabilityDto>),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 403, description = "Caller does not own the vehicle", body = ErrorDto)
    ),
)]
pub async fn set_default_availability(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SetDefaultAvailabilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rows = AvailabilityService::new(&state.db)
        .set_default(&user.external_id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, AvailabilityDto>(rows))))
}
