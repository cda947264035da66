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
        message::{
            EditMessageDto, HostMessageStatsDto, MessageDto, SendMessageDto, SystemMessageDto,
            UnreadCountDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::message::MessageService,
        state::AppState,
    },
};

pub static MESSAGE_TAG: &str = "message";

/// Sends a message.
///
/// Either `conversation_id` or all of `vehicle_id`, `renter_id` and `owner_id` must be
/// given. In the latter case the conversation is opened first when it does not exist.
///
/// # Returns
/// - `201 Created` - The stored message
/// - `400 Bad Request` - Empty content or missing conversation fields
/// - `403 Forbidden` - Caller is not a participant
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Sent message", body = MessageDto),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let message = MessageService::new(&state.db)
        .send(&user.external_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(MessageDto::from(message))))
}

#[utoipa::path(
    get,
    path = "/api/messages/unread-count",
    tag = MESSAGE_TAG,
    responses(
        (status = 200, description = "Unread messages across active conversations", body = UnreadCountDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_unread_count(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let unread_count = MessageService::new(&state.db)
        .unread_count(&user.external_id)
        .await?;

    Ok((StatusCode::OK, Json(UnreadCountDto { unread_count })))
}

#[utoipa::path(
    post,
    path = "/api/messages/{id}/read",
    tag = MESSAGE_TAG,
    params(("id" = i32, Path, description = "Message id")),
    responses(
        (status = 200, description = "Message", body = MessageDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto)
    ),
)]
pub async fn mark_message_read(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let message = MessageService::new(&state.db)
        .mark_read(&user.external_id, id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::from(message))))
}

/// Edits the caller's message within 15 minutes of sending it.
#[utoipa::path(
    put,
    path = "/api/messages/{id}",
    tag = MESSAGE_TAG,
    params(("id" = i32, Path, description = "Message id")),
    request_body = EditMessageDto,
    responses(
        (status = 200, description = "Edited message", body = MessageDto),
        (status = 400, description = "Empty content or edit window passed", body = ErrorDto),
        (status = 403, description = "Caller is not the sender", body = ErrorDto)
    ),
)]
pub async fn edit_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<EditMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let message = MessageService::new(&state.db)
        .edit(&user.external_id, id, payload.content)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::from(message))))
}

#[utoipa::path(
    delete,
    path = "/api/messages/{id}",
    tag = MESSAGE_TAG,
    params(("id" = i32, Path, description = "Message id")),
    responses(
        (status = 200, description = "Message deleted", body = SuccessDto),
        (status = 403, description = "Caller is not the sender", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto)
    ),
)]
pub async fn delete_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    MessageService::new(&state.db)
        .delete(&user.external_id, id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// Posts an automated message as host, such as a booking reminder.
#[utoipa::path(
    post,
    path = "/api/host/messages/system",
    tag = MESSAGE_TAG,
    request_body = SystemMessageDto,
    responses(
        (status = 201, description = "Sent system message", body = MessageDto),
        (status = 403, description = "Caller is not the host of the conversation", body = ErrorDto)
    ),
)]
pub async fn send_system_message(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SystemMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let message = MessageService::new(&state.db)
        .send_system_message(&user.external_id, payload.conversation_id, payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(MessageDto::from(message))))
}

#[utoipa::path(
    get,
    path = "/api/host/messages/stats",
    tag = MESSAGE_TAG,
    responses(
        (status = 200, description = "Host message statistics", body = HostMessageStatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_host_message_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let stats = MessageService::new(&state.db)
        .host_stats(&user.external_id)
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}
