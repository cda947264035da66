use chrono::{DateTime, Duration, Utc};

use crate::model::message::MessageDto;

/// How long after sending a message may still be edited.
pub const EDIT_WINDOW_MINUTES: i64 = 15;

pub fn within_edit_window(sent_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - sent_at <= Duration::minutes(EDIT_WINDOW_MINUTES)
}

impl From<entity::message::Model> for MessageDto {
    fn from(m: entity::message::Model) -> Self {
        Self {
            id: m.id,
            conversation_id: m.conversation_id,
            sender_id: m.sender_id,
            content: m.content,
            message_type: m.message_type,
            is_read: m.is_read,
            read_at: m.read_at,
            created_at: m.created_at,
        }
    }
}
