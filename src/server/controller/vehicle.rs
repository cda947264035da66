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
        vehicle::{
            AddVehicleImageDto, CreateVehicleDto, UpdateVehicleDto, VehicleDetailDto, VehicleDto,
            VehicleImageDto, VehicleSummaryDto,
        },
    },
    server::{
        controller::into_dtos, error::AppError, middleware::auth::AuthGuard,
        service::vehicle::VehicleService, state::AppState,
    },
};

pub static VEHICLE_TAG: &str = "vehicle";

#[derive(Deserialize)]
pub struct VehicleListQuery {
    pub track_id: Option<i32>,
    pub limit: Option<u64>,
}

/// Lists active, approved vehicles, newest first.
///
/// # Arguments
/// - `track_id` - Only vehicles kept at this track
/// - `limit` - Maximum number of vehicles, 50 when omitted
///
/// # Returns
/// - `200 OK` - Vehicles with their primary image
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    params(
        ("track_id" = Option<i32>, Query, description = "Filter by track"),
        ("limit" = Option<u64>, Query, description = "Maximum results (default 50, at most 100)")
    ),
    responses(
        (status = 200, description = "Listed vehicles", body = Vec<VehicleSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let vehicles = VehicleService::new(&state.db)
        .list(query.track_id, query.limit)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, VehicleSummaryDto>(vehicles))))
}

/// Vehicle with images, owner, track and availability rows.
#[utoipa::path(
    get,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Vehicle details", body = VehicleDetailDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let vehicle = VehicleService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(VehicleDetailDto::from(vehicle))))
}

/// The caller's active listings, approved or not.
#[utoipa::path(
    get,
    path = "/api/vehicles/mine",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Caller's vehicles", body = Vec<VehicleSummaryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_my_vehicles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let vehicles = VehicleService::new(&state.db)
        .list_by_owner(&user.external_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, VehicleSummaryDto>(vehicles))))
}

/// Lists a vehicle for rent.
///
/// The caller becomes the owner. New listings are active but await admin approval
/// before they show up in [`list_vehicles`].
///
/// # Returns
/// - `201 Created` - The new vehicle
/// - `400 Bad Request` - Invalid vehicle data
/// - `404 Not Found` - Unknown track
#[utoipa::path(
    post,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    request_body = CreateVehicleDto,
    responses(
        (status = 201, description = "Created vehicle", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Track not found", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let vehicle = VehicleService::new(&state.db)
        .create(&user.external_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(VehicleDto::from(vehicle))))
}

#[utoipa::path(
    put,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle id")),
    request_body = UpdateVehicleDto,
    responses(
        (status = 200, description = "Updated vehicle", body = VehicleDto),
        (status = 403, description = "Caller does not own the vehicle", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let vehicle = VehicleService::new(&state.db)
        .update(&user.external_id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(VehicleDto::from(vehicle))))
}

/// Takes a listing down. The row stays for existing reservations.
#[utoipa::path(
    delete,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Vehicle deactivated", body = SuccessDto),
        (status = 403, description = "Caller does not own the vehicle", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    VehicleService::new(&state.db)
        .remove(&user.external_id, id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

#[utoipa::path(
    post,
    path = "/api/vehicles/{id}/images",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle id")),
    request_body = AddVehicleImageDto,
    responses(
        (status = 201, description = "Added image", body = VehicleImageDto),
        (status = 403, description = "Caller does not own the vehicle", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto)
    ),
)]
pub async fn add_vehicle_image(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AddVehicleImageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let image = VehicleService::new(&state.db)
        .add_image(&user.external_id, id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(VehicleImageDto::from(image))))
}

#[utoipa::path(
    delete,
    path = "/api/vehicles/images/{image_id}",
    tag = VEHICLE_TAG,
    params(("image_id" = i32, Path, description = "Image id")),
    responses(
        (status = 200, description = "Image removed", body = SuccessDto),
        (status = 403, description = "Caller does not own the vehicle", body = ErrorDto),
        (status = 404, description = "Image not found", body = ErrorDto)
    ),
)]
pub async fn remove_vehicle_image(
    State(state): State<AppState>,
    session: Session,
    Path(image_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    VehicleService::new(&state.db)
        .remove_image(&user.external_id, image_id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}
