use chrono::Utc;
use entity::sea_orm_active_enums::MessageType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        conversation_id: i32,
        sender_id: &str,
        content: String,
        message_type: MessageType,
    ) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            conversation_id: ActiveValue::Set(conversation_id),
            sender_id: ActiveValue::Set(sender_id.to_string()),
            content: ActiveValue::Set(content),
            message_type: ActiveValue::Set(message_type),
            is_read: ActiveValue::Set(false),
            read_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::message::Model>, DbErr> {
        entity::prelude::Message::find_by_id(id).one(self.db).await
    }

    /// The newest `limit` messages, returned oldest first.
    pub async fn list_recent(
        &self,
        conversation_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::message::Model>, DbErr> {
        let mut messages = entity::prelude::Message::find()
            .filter(entity::message::Column::ConversationId.eq(conversation_id))
            .order_by_desc(entity::message::Column::CreatedAt)
            .order_by_desc(entity::message::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        messages.reverse();
        Ok(messages)
    }

    /// Every message of the conversations, oldest first.
    pub async fn list_by_conversations(
        &self,
        conversation_ids: Vec<i32>,
    ) -> Result<Vec<entity::message::Model>, DbErr> {
        if conversation_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Message::find()
            .filter(entity::message::Column::ConversationId.is_in(conversation_ids))
            .order_by_asc(entity::message::Column::CreatedAt)
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await
    }

    /// Marks every unread message of the conversation not sent by `reader` as read.
    pub async fn mark_read_for_reader(
        &self,
        conversation_id: i32,
        reader_id: &str,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Message::update_many()
            .filter(entity::message::Column::ConversationId.eq(conversation_id))
            .filter(entity::message::Column::SenderId.ne(reader_id))
            .filter(entity::message::Column::IsRead.eq(false))
            .col_expr(
                entity::message::Column::IsRead,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::message::Column::ReadAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn mark_read(
        &self,
        message: entity::message::Model,
    ) -> Result<entity::message::Model, DbErr> {
        let mut active = message.into_active_model();
        active.is_read = ActiveValue::Set(true);
        active.read_at = ActiveValue::Set(Some(Utc::now()));

        active.update(self.db).await
    }

    pub async fn update_content(
        &self,
        message: entity::message::Model,
        content: String,
    ) -> Result<entity::message::Model, DbErr> {
        let mut active = message.into_active_model();
        active.content = ActiveValue::Set(content);

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Message::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }

    /// Number of messages in the conversations sent by `sender_id`.
    pub async fn count_sent_by(
        &self,
        conversation_ids: Vec<i32>,
        sender_id: &str,
    ) -> Result<u64, DbErr> {
        if conversation_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Message::find()
            .filter(entity::message::Column::ConversationId.is_in(conversation_ids))
            .filter(entity::message::Column::SenderId.eq(sender_id))
            .count(self.db)
            .await
    }

    /// Number of messages in the conversations sent by anyone but `user_id`.
    pub async fn count_received_by(
        &self,
        conversation_ids: Vec<i32>,
        user_id: &str,
    ) -> Result<u64, DbErr> {
        if conversation_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Message::find()
            .filter(entity::message::Column::ConversationId.is_in(conversation_ids))
            .filter(entity::message::Column::SenderId.ne(user_id))
            .count(self.db)
            .await
    }
}
