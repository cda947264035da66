use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::MessageType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub conversation_id: i32,
    pub sender_id: String,
    pub content: String,
    #[schema(value_type = String)]
    pub message_type: MessageType,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Send into an existing conversation, or name the vehicle and both parties to open one.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct SendMessageDto {
    pub conversation_id: Option<i32>,
    pub vehicle_id: Option<i32>,
    pub renter_id: Option<String>,
    pub owner_id: Option<String>,
    pub content: String,
    #[schema(value_type = Option<String>)]
    pub message_type: Option<MessageType>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct EditMessageDto {
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SystemMessageDto {
    pub conversation_id: i32,
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UnreadCountDto {
    pub unread_count: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct HostMessageStatsDto {
    pub total_conversations: u64,
    pub active_conversations: u64,
    pub unread_messages: i64,
    pub messages_sent: u64,
    pub messages_received: u64,
}
