use chrono::{Duration, Utc};

use crate::{
    model::message::SendMessageDto,
    server::{
        data::conversation::ConversationRepository, error::AppError,
        service::message::MessageService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod send;

fn text(conversation_id: Option<i32>, content: &str) -> SendMessageDto {
    SendMessageDto {
        conversation_id,
        vehicle_id: None,
        renter_id: None,
        owner_id: None,
        content: content.to_string(),
        message_type: None,
    }
}
