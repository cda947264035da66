use crate::server::{
    data::{conversation::ConversationRepository, message::MessageRepository},
    model::party::Party,
};
use entity::sea_orm_active_enums::MessageType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod list_for_user;
mod record_message;
