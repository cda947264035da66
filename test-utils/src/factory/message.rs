use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::MessageType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for message rows. Defaults to an unread text message sent now.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    conversation_id: i32,
    sender_id: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl<'a> MessageFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, conversation_id: i32, sender_id: &str) -> Self {
        Self {
            db,
            conversation_id,
            sender_id: sender_id.to_string(),
            content: "Is the car still available?".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            conversation_id: ActiveValue::Set(self.conversation_id),
            sender_id: ActiveValue::Set(self.sender_id),
            content: ActiveValue::Set(self.content),
            message_type: ActiveValue::Set(MessageType::Text),
            is_read: ActiveValue::Set(false),
            read_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_message(
    db: &DatabaseConnection,
    conversation_id: i32,
    sender_id: &str,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, conversation_id, sender_id).build().await
}
