use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{user::UserSummaryDto, vehicle::VehicleDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ConversationDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub renter_id: String,
    pub owner_id: String,
    pub last_message_at: DateTime<Utc>,
    pub last_message_text: Option<String>,
    pub last_message_sender_id: Option<String>,
    pub unread_count_renter: i32,
    pub unread_count_owner: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Conversation list entry with the vehicle and the party on the other side.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ConversationSummaryDto {
    #[serde(flatten)]
    pub conversation: ConversationDto,
    pub vehicle: Option<VehicleDto>,
    pub other_party: Option<UserSummaryDto>,
    /// Unread messages for the caller's side.
    pub unread_count: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateConversationDto {
    pub vehicle_id: i32,
    pub renter_id: String,
    pub owner_id: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, ToSchema)]
pub enum AnalyticsRange {
    #[serde(rename = "7d")]
    #[default]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct HostAnalyticsDto {
    pub total_conversations: u64,
    pub active_conversations: u64,
    pub archived_conversations: u64,
    pub unread_messages: i64,
    /// Mean minutes between a renter message and the host's next reply.
    pub average_response_minutes: Option<f64>,
    pub response_count: u64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BulkAction {
    Archive,
    Unarchive,
    MarkRead,
    Delete,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct BulkActionDto {
    pub conversation_ids: Vec<i32>,
    pub action: BulkAction,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BulkActionResultDto {
    pub processed: Vec<i32>,
}
