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
        team::{CreateTeamDto, TeamDto, UpdateTeamDto},
        team_application::{PublicTeamApplicationDto, TeamApplicationDto},
    },
    server::{
        controller::into_dtos,
        data::team::TeamFilter,
        error::AppError,
        middleware::auth::AuthGuard,
        service::{team::TeamService, team_application::TeamApplicationService},
        state::AppState,
    },
};

pub static TEAM_TAG: &str = "team";

/// Public directory of active teams.
///
/// # Arguments
/// - `location` - Case-insensitive part of the team location
/// - `min_seats` - Minimum number of open seats
/// - `specialties` - Comma separated; teams listing any of them match
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    params(
        ("location" = Option<String>, Query, description = "Location contains"),
        ("min_seats" = Option<i32>, Query, description = "Minimum open seats"),
        ("specialties" = Option<String>, Query, description = "Comma separated specialties")
    ),
    responses(
        (status = 200, description = "Teams", body = Vec<TeamDto>)
    ),
)]
pub async fn list_teams(
    State(state): State<AppState>,
    Query(filter): Query<TeamFilter>,
) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db).list(filter).await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, TeamDto>(teams))))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(TeamDto::from(team))))
}

#[utoipa::path(
    get,
    path = "/api/teams/mine",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Teams owned by the caller", body = Vec<TeamDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_my_teams(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let teams = TeamService::new(&state.db)
        .list_by_owner(&user.external_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, TeamDto>(teams))))
}

/// Creates a team owned by the caller, who also gains the team role.
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Created team", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let team = TeamService::new(&state.db)
        .create(&user.external_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(TeamDto::from(team))))
}

#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Updated team", body = TeamDto),
        (status = 403, description = "Caller does not own the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let team = TeamService::new(&state.db)
        .update(&user.external_id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(TeamDto::from(team))))
}

#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team deleted", body = SuccessDto),
        (status = 403, description = "Caller does not own the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    TeamService::new(&state.db)
        .delete(&user.external_id, id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// All applications to the caller's team, with driver details.
#[utoipa::path(
    get,
    path = "/api/teams/{id}/applications",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Applications", body = Vec<TeamApplicationDto>),
        (status = 403, description = "Caller does not own the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn list_team_applications(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let applications = TeamApplicationService::new(&state.db)
        .list_by_team(&user.external_id, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(into_dtos::<_, TeamApplicationDto>(applications)),
    ))
}

/// Applications to a team without driver identities or contact details.
#[utoipa::path(
    get,
    path = "/api/teams/{id}/applications/public",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Applications", body = Vec<PublicTeamApplicationDto>)
    ),
)]
pub async fn list_public_team_applications(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let applications = TeamApplicationService::new(&state.db)
        .list_public_by_team(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(into_dtos::<_, PublicTeamApplicationDto>(applications)),
    ))
}
