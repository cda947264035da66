use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        driver::{CreateDriverProfileDto, DriverProfileDto, UpdateDriverProfileDto},
    },
    server::{
        controller::into_dtos, data::driver_profile::DriverFilter, error::AppError,
        middleware::auth::AuthGuard, service::driver::DriverService, state::AppState,
    },
};

pub static DRIVER_TAG: &str = "driver";

#[utoipa::path(
    get,
    path = "/api/drivers",
    tag = DRIVER_TAG,
    params(
        ("location" = Option<String>, Query, description = "Location contains"),
        ("experience" = Option<String>, Query, description = "Experience level"),
        ("categories" = Option<String>, Query, description = "Comma separated racing categories"),
        ("availability" = Option<String>, Query, description = "Comma separated availability")
    ),
    responses(
        (status = 200, description = "Active driver profiles", body = Vec<DriverProfileDto>)
    ),
)]
pub async fn list_drivers(
    State(state): State<AppState>,
    Query(filter): Query<DriverFilter>,
) -> Result<impl IntoResponse, AppError> {
    let drivers = DriverService::new(&state.db).list(filter).await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, DriverProfileDto>(drivers))))
}

#[utoipa::path(
    get,
    path = "/api/drivers/{id}",
    tag = DRIVER_TAG,
    params(("id" = i32, Path, description = "Driver profile id")),
    responses(
        (status = 200, description = "Driver profile", body = DriverProfileDto),
        (status = 404, description = "Driver profile not found", body = ErrorDto)
    ),
)]
pub async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let driver = DriverService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(DriverProfileDto::from(driver))))
}

/// The caller's own driver profile.
///
/// # Returns
/// - `200 OK` - The profile
/// - `404 Not Found` - Caller has no driver profile yet
#[utoipa::path(
    get,
    path = "/api/drivers/me",
    tag = DRIVER_TAG,
    responses(
        (status = 200, description = "Driver profile", body = DriverProfileDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Driver profile not found", body = ErrorDto)
    ),
)]
pub async fn get_my_driver_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let driver = DriverService::new(&state.db)
        .get_by_user(&user.external_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Driver profile not found".to_string()))?;

    Ok((StatusCode::OK, Json(DriverProfileDto::from(driver))))
}

/// Creates the caller's driver profile. A user has at most one.
#[utoipa::path(
    post,
    path = "/api/drivers",
    tag = DRIVER_TAG,
    request_body = CreateDriverProfileDto,
    responses(
        (status = 201, description = "Created driver profile", body = DriverProfileDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 409, description = "Caller already has a driver profile", body = ErrorDto)
    ),
)]
pub async fn create_driver(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDriverProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let driver = DriverService::new(&state.db)
        .create(&user.external_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(DriverProfileDto::from(driver))))
}

#[utoipa::path(
    put,
    path = "/api/drivers/{id}",
    tag = DRIVER_TAG,
    params(("id" = i32, Path, description = "Driver profile id")),
    request_body = UpdateDriverProfileDto,
    responses(
        (status = 200, description = "Updated driver profile", body = DriverProfileDto),
        (status = 403, description = "Profile belongs to another user", body = ErrorDto),
        (status = 404, description = "Driver profile not found", body = ErrorDto)
    ),
)]
pub async fn update_driver(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDriverProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let driver = DriverService::new(&state.db)
        .update(&user.external_id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(DriverProfileDto::from(driver))))
}

#[utoipa::path(
    delete,
    path = "/api/drivers/{id}",
    tag = DRIVER_TAG,
    params(("id" = i32, Path, description = "Driver profile id")),
    responses(
        (status = 200, description = "Driver profile deleted", body = SuccessDto),
        (status = 403, description = "Profile belongs to another user", body = ErrorDto),
        (status = 404, description = "Driver profile not found", body = ErrorDto)
    ),
)]
pub async fn delete_driver(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    DriverService::new(&state.db)
        .delete(&user.external_id, id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}
