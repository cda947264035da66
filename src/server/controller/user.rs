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
        user::{UpdateProfileDto, UpdateProfileImageDto, UserDto, UserSummaryDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// Returns the caller's full profile.
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Caller's profile", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Public profile of a user by their identity provider id.
///
/// # Returns
/// - `200 OK` - Name, image and rating of the user
/// - `404 Not Found` - No such user
#[utoipa::path(
    get,
    path = "/api/users/{external_id}",
    tag = USER_TAG,
    params(
        ("external_id" = String, Path, description = "Identity provider user id")
    ),
    responses(
        (status = 200, description = "Public profile", body = UserSummaryDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(external_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .get_by_external_id(&external_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(UserSummaryDto::from(user))))
}

/// Updates the caller's name, email or phone.
///
/// Missing fields are left unchanged.
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .update_profile(&user.external_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

#[utoipa::path(
    put,
    path = "/api/users/me/image",
    tag = USER_TAG,
    request_body = UpdateProfileImageDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn update_profile_image(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileImageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .update_profile_image(&user.external_id, payload.image_url)
        .await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}
