//! Admin only endpoints: listing approval, platform settings and application oversight.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::ApplicationStatus;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        payment::PlatformSettingsDto,
        team_application::TeamApplicationDto,
        vehicle::{VehicleDto, VehicleSummaryDto},
    },
    server::{
        controller::into_dtos,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{
            payment::PaymentService, team_application::TeamApplicationService,
            vehicle::VehicleService,
        },
        state::AppState,
    },
};

pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize)]
pub struct ApplicationStatusQuery {
    pub status: ApplicationStatus,
}

/// Vehicles awaiting approval.
///
/// # Access Control
/// - `Admin` - Only admins can review listings
#[utoipa::path(
    get,
    path = "/api/admin/vehicles/pending",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Vehicles awaiting approval", body = Vec<VehicleSummaryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
)]
pub async fn list_pending_vehicles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let vehicles = VehicleService::new(&state.db).list_pending().await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, VehicleSummaryDto>(vehicles))))
}

/// Approves a listing so it shows up publicly.
#[utoipa::path(
    post,
    path = "/api/admin/vehicles/{id}/approve",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Approved vehicle", body = VehicleDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto)
    ),
)]
pub async fn approve_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let vehicle = VehicleService::new(&state.db).approve(id).await?;
    tracing::info!("Vehicle {} approved by {}", vehicle.id, admin.external_id);

    Ok((StatusCode::OK, Json(VehicleDto::from(vehicle))))
}

/// Rejects a listing, which also deactivates it.
#[utoipa::path(
    post,
    path = "/api/admin/vehicles/{id}/reject",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Rejected vehicle", body = VehicleDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto)
    ),
)]
pub async fn reject_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let vehicle = VehicleService::new(&state.db).reject(id).await?;
    tracing::info!("Vehicle {} rejected by {}", vehicle.id, admin.external_id);

    Ok((StatusCode::OK, Json(VehicleDto::from(vehicle))))
}

/// Writes the default fee settings unless settings already exist.
#[utoipa::path(
    post,
    path = "/api/admin/settings/initialize",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Active platform settings", body = PlatformSettingsDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
)]
pub async fn initialize_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let settings = PaymentService::new(&state.db, state.payment_gateway.as_ref())
        .initialize_settings()
        .await?;

    Ok((StatusCode::OK, Json(PlatformSettingsDto::from(settings))))
}

/// Team applications across all teams with the given status.
#[utoipa::path(
    get,
    path = "/api/admin/team-applications",
    tag = ADMIN_TAG,
    params(
        ("status" = String, Query, description = "pending, accepted, declined or withdrawn")
    ),
    responses(
        (status = 200, description = "Matching applications", body = Vec<TeamApplicationDto>),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
)]
pub async fn list_applications_by_status(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ApplicationStatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let applications = TeamApplicationService::new(&state.db)
        .list_by_status(query.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(into_dtos::<_, TeamApplicationDto>(applications)),
    ))
}
