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
        track::{CreateTrackDto, TrackDto},
    },
    server::{
        controller::into_dtos,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::track::TrackService,
        state::AppState,
    },
};

pub static TRACK_TAG: &str = "track";

/// Lists active tracks by name.
#[utoipa::path(
    get,
    path = "/api/tracks",
    tag = TRACK_TAG,
    responses(
        (status = 200, description = "Active tracks", body = Vec<TrackDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tracks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tracks = TrackService::new(&state.db).list_active().await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, TrackDto>(tracks))))
}

#[utoipa::path(
    get,
    path = "/api/tracks/{id}",
    tag = TRACK_TAG,
    params(("id" = i32, Path, description = "Track id")),
    responses(
        (status = 200, description = "The track", body = TrackDto),
        (status = 404, description = "Track not found", body = ErrorDto)
    ),
)]
pub async fn get_track(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let track = TrackService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(TrackDto::from(track))))
}

/// Adds a track.
///
/// # Access Control
/// - `Admin` - Only admins can add tracks
///
/// # Returns
/// - `201 Created` - The new track
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` / `403 Forbidden` - Not signed in or not an admin
#[utoipa::path(
    post,
    path = "/api/tracks",
    tag = TRACK_TAG,
    request_body = CreateTrackDto,
    responses(
        (status = 201, description = "Created track", body = TrackDto),
        (status = 400, description = "Invalid track data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
)]
pub async fn create_track(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTrackDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let track = TrackService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(TrackDto::from(track))))
}
