use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        team_application::{ApplyToTeamDto, TeamApplicationDto, UpdateApplicationStatusDto},
    },
    server::{
        controller::into_dtos, error::AppError, middleware::auth::AuthGuard,
        service::team_application::TeamApplicationService, state::AppState,
    },
};

pub static TEAM_APPLICATION_TAG: &str = "team_application";

/// Applies to a team as a driver.
///
/// A driver may hold one pending application per team and cannot apply to a team they
/// own. Withdrawn or declined applications do not block a new one.
#[utoipa::path(
    post,
    path = "/api/team-applications",
    tag = TEAM_APPLICATION_TAG,
    request_body = ApplyToTeamDto,
    responses(
        (status = 201, description = "Created application", body = TeamApplicationDto),
        (status = 400, description = "Cannot apply to this team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Pending application already exists", body = ErrorDto)
    ),
)]
pub async fn apply_to_team(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ApplyToTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let application = TeamApplicationService::new(&state.db)
        .apply(&user.external_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(TeamApplicationDto::from(application))))
}

#[utoipa::path(
    get,
    path = "/api/team-applications/mine",
    tag = TEAM_APPLICATION_TAG,
    responses(
        (status = 200, description = "The caller's applications", body = Vec<TeamApplicationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_my_applications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let applications = TeamApplicationService::new(&state.db)
        .list_by_driver(&user.external_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(into_dtos::<_, TeamApplicationDto>(applications)),
    ))
}

/// Moves a pending application on.
///
/// The team owner may accept or decline; the applying driver may withdraw.
#[utoipa::path(
    put,
    path = "/api/team-applications/{id}/status",
    tag = TEAM_APPLICATION_TAG,
    params(("id" = i32, Path, description = "Application id")),
    request_body = UpdateApplicationStatusDto,
    responses(
        (status = 200, description = "Updated application", body = TeamApplicationDto),
        (status = 400, description = "Application already decided", body = ErrorDto),
        (status = 403, description = "Caller may not set this status", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto)
    ),
)]
pub async fn update_application_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateApplicationStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let application = TeamApplicationService::new(&state.db)
        .update_status(&user.external_id, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(TeamApplicationDto::from(application))))
}
