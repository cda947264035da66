use chrono::{DateTime, Duration, Utc};

use crate::model::{
    conversation::{AnalyticsRange, ConversationDto, ConversationSummaryDto},
    user::UserSummaryDto,
    vehicle::VehicleDto,
};
use crate::server::model::party::Party;

impl AnalyticsRange {
    /// Start of the window ending at `now`.
    pub fn since(self, now: DateTime<Utc>) -> DateTime<Utc> {
        let days = match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        };
        now - Duration::days(days)
    }
}

/// Unread counter of `party`'s side.
pub fn unread_for(conversation: &entity::conversation::Model, party: Party) -> i32 {
    match party {
        Party::Renter => conversation.unread_count_renter,
        Party::Owner => conversation.unread_count_owner,
    }
}

/// Minutes between each message from someone else and the host's immediate reply.
///
/// `messages` must be in send order.
pub fn host_response_minutes(messages: &[entity::message::Model], host_id: &str) -> Vec<f64> {
    messages
        .windows(2)
        .filter(|pair| pair[0].sender_id != host_id && pair[1].sender_id == host_id)
        .map(|pair| (pair[1].created_at - pair[0].created_at).num_seconds() as f64 / 60.0)
        .collect()
}

#[derive(Debug, Clone)]
pub struct ConversationSummary {
    pub conversation: entity::conversation::Model,
    pub vehicle: Option<entity::vehicle::Model>,
    pub other_party: Option<entity::user::Model>,
    pub unread_count: i32,
}

impl From<entity::conversation::Model> for ConversationDto {
    fn from(c: entity::conversation::Model) -> Self {
        Self {
            id: c.id,
            vehicle_id: c.vehicle_id,
            renter_id: c.renter_id,
            owner_id: c.owner_id,
            last_message_at: c.last_message_at,
            last_message_text: c.last_message_text,
            last_message_sender_id: c.last_message_sender_id,
            unread_count_renter: c.unread_count_renter,
            unread_count_owner: c.unread_count_owner,
            is_active: c.is_active,
            created_at: c.created_at,
        }
    }
}

impl From<ConversationSummary> for ConversationSummaryDto {
    fn from(summary: ConversationSummary) -> Self {
        Self {
            conversation: summary.conversation.into(),
            vehicle: summary.vehicle.map(VehicleDto::from),
            other_party: summary.other_party.map(UserSummaryDto::from),
            unread_count: summary.unread_count,
        }
    }
}
