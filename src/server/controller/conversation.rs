//! Renter/owner conversations and the host inbox tools.

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
        conversation::{
            AnalyticsRange, BulkActionDto, BulkActionResultDto, ConversationDto,
            ConversationSummaryDto, CreateConversationDto, HostAnalyticsDto,
        },
        message::MessageDto,
    },
    server::{
        controller::{into_dtos, reservation::RoleQuery},
        error::AppError,
        middleware::auth::AuthGuard,
        service::{conversation::ConversationService, message::MessageService},
        state::AppState,
    },
};

pub static CONVERSATION_TAG: &str = "conversation";

#[derive(Deserialize)]
pub struct FindConversationQuery {
    pub vehicle_id: i32,
    pub renter_id: String,
    pub owner_id: String,
}

#[derive(Deserialize)]
pub struct MessageListQuery {
    pub limit: Option<u64>,
}

#[derive(Deserialize)]
pub struct HostConversationsQuery {
    #[serde(default)]
    pub include_archived: bool,
}

#[derive(Deserialize)]
pub struct AnalyticsQuery {
    #[serde(default)]
    pub range: AnalyticsRange,
}

/// Active conversations on the caller's side, most recent activity first.
#[utoipa::path(
    get,
    path = "/api/conversations",
    tag = CONVERSATION_TAG,
    params(("role" = Option<String>, Query, description = "renter (default) or owner")),
    responses(
        (status = 200, description = "Conversations", body = Vec<ConversationSummaryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_conversations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RoleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let conversations = ConversationService::new(&state.db)
        .list_for_user(&user.external_id, query.role)
        .await?;

    Ok((
        StatusCode::OK,
        Json(into_dtos::<_, ConversationSummaryDto>(conversations)),
    ))
}

/// Opens a conversation about a vehicle, returning the existing one for the same
/// vehicle and participants.
#[utoipa::path(
    post,
    path = "/api/conversations",
    tag = CONVERSATION_TAG,
    request_body = CreateConversationDto,
    responses(
        (status = 200, description = "Conversation", body = ConversationDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto)
    ),
)]
pub async fn create_conversation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateConversationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let conversation = ConversationService::new(&state.db)
        .create(
            &user.external_id,
            payload.vehicle_id,
            &payload.renter_id,
            &payload.owner_id,
        )
        .await?;

    Ok((StatusCode::OK, Json(ConversationDto::from(conversation))))
}

/// Looks up the conversation for a vehicle and pair of participants.
///
/// # Returns
/// - `200 OK` - The conversation, or `null` when none exists
/// - `403 Forbidden` - Caller is not one of the participants
#[utoipa::path(
    get,
    path = "/api/conversations/find",
    tag = CONVERSATION_TAG,
    params(
        ("vehicle_id" = i32, Query, description = "Vehicle id"),
        ("renter_id" = String, Query, description = "Renter id"),
        ("owner_id" = String, Query, description = "Owner id")
    ),
    responses(
        (status = 200, description = "Conversation or null", body = Option<ConversationDto>),
        (status = 403, description = "Caller is not a participant", body = ErrorDto)
    ),
)]
pub async fn find_conversation(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<FindConversationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if user.external_id != query.renter_id && user.external_id != query.owner_id {
        return Err(AppError::Forbidden(
            "Not authorized to access this conversation".to_string(),
        ));
    }

    let conversation = ConversationService::new(&state.db)
        .find(query.vehicle_id, &query.renter_id, &query.owner_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(conversation.map(ConversationDto::from)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/conversations/{id}",
    tag = CONVERSATION_TAG,
    params(("id" = i32, Path, description = "Conversation id")),
    responses(
        (status = 200, description = "Conversation", body = ConversationSummaryDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 404, description = "Conversation not found", body = ErrorDto)
    ),
)]
pub async fn get_conversation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let conversation = ConversationService::new(&state.db)
        .get_by_id(&user.external_id, id)
        .await?;

    Ok((StatusCode::OK, Json(ConversationSummaryDto::from(conversation))))
}

/// Deletes the conversation and all of its messages.
#[utoipa::path(
    delete,
    path = "/api/conversations/{id}",
    tag = CONVERSATION_TAG,
    params(("id" = i32, Path, description = "Conversation id")),
    responses(
        (status = 200, description = "Conversation deleted", body = SuccessDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 404, description = "Conversation not found", body = ErrorDto)
    ),
)]
pub async fn delete_conversation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ConversationService::new(&state.db)
        .delete(&user.external_id, id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

#[utoipa::path(
    post,
    path = "/api/conversations/{id}/read",
    tag = CONVERSATION_TAG,
    params(("id" = i32, Path, description = "Conversation id")),
    responses(
        (status = 200, description = "Conversation marked read", body = SuccessDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto)
    ),
)]
pub async fn mark_conversation_read(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ConversationService::new(&state.db)
        .mark_read(&user.external_id, id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

#[utoipa::path(
    post,
    path = "/api/conversations/{id}/archive",
    tag = CONVERSATION_TAG,
    params(("id" = i32, Path, description = "Conversation id")),
    responses(
        (status = 200, description = "Archived conversation", body = ConversationDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto)
    ),
)]
pub async fn archive_conversation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let conversation = ConversationService::new(&state.db)
        .archive(&user.external_id, id)
        .await?;

    Ok((StatusCode::OK, Json(ConversationDto::from(conversation))))
}

/// The newest messages of a conversation in chronological order.
#[utoipa::path(
    get,
    path = "/api/conversations/{id}/messages",
    tag = CONVERSATION_TAG,
    params(
        ("id" = i32, Path, description = "Conversation id"),
        ("limit" = Option<u64>, Query, description = "Maximum messages (default 50, at most 100)")
    ),
    responses(
        (status = 200, description = "Messages, oldest first", body = Vec<MessageDto>),
        (status = 403, description = "Caller is not a participant", body = ErrorDto)
    ),
)]
pub async fn list_messages(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(query): Query<MessageListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let messages = MessageService::new(&state.db)
        .list(&user.external_id, id, query.limit)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, MessageDto>(messages))))
}

/// The caller's conversations as host.
#[utoipa::path(
    get,
    path = "/api/host/conversations",
    tag = CONVERSATION_TAG,
    params(("include_archived" = Option<bool>, Query, description = "Include archived conversations")),
    responses(
        (status = 200, description = "Host conversations", body = Vec<ConversationSummaryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_host_conversations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<HostConversationsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let conversations = MessageService::new(&state.db)
        .host_conversations(&user.external_id, query.include_archived)
        .await?;

    Ok((
        StatusCode::OK,
        Json(into_dtos::<_, ConversationSummaryDto>(conversations)),
    ))
}

/// Applies one action to many of the host's conversations.
///
/// Unknown ids are skipped. A conversation hosted by someone else rejects the whole batch.
#[utoipa::path(
    post,
    path = "/api/host/conversations/bulk",
    tag = CONVERSATION_TAG,
    request_body = BulkActionDto,
    responses(
        (status = 200, description = "Processed conversation ids", body = BulkActionResultDto),
        (status = 403, description = "A conversation belongs to another host", body = ErrorDto)
    ),
)]
pub async fn bulk_conversation_action(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BulkActionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let processed = ConversationService::new(&state.db)
        .bulk_action(&user.external_id, payload.conversation_ids, payload.action)
        .await?;

    Ok((StatusCode::OK, Json(BulkActionResultDto { processed })))
}

#[utoipa::path(
    get,
    path = "/api/host/analytics",
    tag = CONVERSATION_TAG,
    params(("range" = Option<String>, Query, description = "7d (default), 30d, 90d or 1y")),
    responses(
        (status = 200, description = "Inbox analytics", body = HostAnalyticsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_host_analytics(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AnalyticsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let analytics = ConversationService::new(&state.db)
        .host_analytics(&user.external_id, query.range)
        .await?;

    Ok((StatusCode::OK, Json(analytics)))
}
