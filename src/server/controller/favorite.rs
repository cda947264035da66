use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        favorite::{
            FavoriteCountDto, FavoriteDto, FavoriteRequestDto, IsFavoritedDto, ToggleFavoriteDto,
        },
    },
    server::{
        controller::into_dtos, error::AppError, middleware::auth::AuthGuard,
        service::favorite::FavoriteService, state::AppState,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Saved vehicles, newest first", body = Vec<FavoriteDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let favorites = FavoriteService::new(&state.db)
        .list(&user.external_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, FavoriteDto>(favorites))))
}

/// Saves a listed vehicle.
///
/// # Returns
/// - `201 Created` - The new favorite
/// - `404 Not Found` - Vehicle missing or not listed
/// - `409 Conflict` - Vehicle already saved
#[utoipa::path(
    post,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    request_body = FavoriteRequestDto,
    responses(
        (status = 201, description = "Added favorite", body = FavoriteDto),
        (status = 404, description = "Vehicle not found or not available", body = ErrorDto),
        (status = 409, description = "Vehicle already in favorites", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<FavoriteRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let favorite = FavoriteService::new(&state.db)
        .add(&user.external_id, payload.vehicle_id)
        .await?;

    Ok((StatusCode::CREATED, Json(FavoriteDto::from(favorite))))
}

#[utoipa::path(
    post,
    path = "/api/favorites/toggle",
    tag = FAVORITE_TAG,
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Action taken", body = ToggleFavoriteDto),
        (status = 404, description = "Vehicle not found or not available", body = ErrorDto)
    ),
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<FavoriteRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (action, favorite_id) = FavoriteService::new(&state.db)
        .toggle(&user.external_id, payload.vehicle_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ToggleFavoriteDto {
            action,
            favorite_id,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/favorites/count",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Number of saved vehicles", body = FavoriteCountDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn count_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let count = FavoriteService::new(&state.db)
        .count(&user.external_id)
        .await?;

    Ok((StatusCode::OK, Json(FavoriteCountDto { count })))
}

#[utoipa::path(
    get,
    path = "/api/favorites/{vehicle_id}",
    tag = FAVORITE_TAG,
    params(("vehicle_id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Whether the vehicle is saved", body = IsFavoritedDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn is_favorited(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let is_favorited = FavoriteService::new(&state.db)
        .is_favorited(&user.external_id, vehicle_id)
        .await?;

    Ok((StatusCode::OK, Json(IsFavoritedDto { is_favorited })))
}

#[utoipa::path(
    delete,
    path = "/api/favorites/{vehicle_id}",
    tag = FAVORITE_TAG,
    params(("vehicle_id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Favorite removed", body = SuccessDto),
        (status = 404, description = "Vehicle is not in favorites", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    FavoriteService::new(&state.db)
        .remove(&user.external_id, vehicle_id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}
