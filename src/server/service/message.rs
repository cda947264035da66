//! Sending, reading and editing messages within conversations.

use chrono::Utc;
use entity::sea_orm_active_enums::MessageType;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::message::{HostMessageStatsDto, SendMessageDto},
    server::{
        data::{conversation::ConversationRepository, message::MessageRepository},
        error::AppError,
        model::{
            conversation::{unread_for, ConversationSummary},
            message::within_edit_window,
            page::page_size,
            party::Party,
        },
        service::conversation::{participant_conversation, summarize, ConversationService},
    },
};

pub const DEFAULT_MESSAGE_LIMIT: u64 = 50;

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The newest `limit` messages of a conversation, oldest first.
    pub async fn list(
        &self,
        user_id: &str,
        conversation_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<entity::message::Model>, AppError> {
        participant_conversation(self.db, conversation_id, user_id).await?;

        Ok(MessageRepository::new(self.db)
            .list_recent(conversation_id, page_size(limit, DEFAULT_MESSAGE_LIMIT))
            .await?)
    }

    /// Sends a message, opening the conversation first when only the vehicle and parties
    /// are given.
    ///
    /// # Returns
    /// - `Ok(message)` - The stored message
    /// - `Err(AppError::BadRequest)` - Empty content, or no conversation and incomplete ids
    /// - `Err(AppError::Forbidden)` - Caller is not a participant
    pub async fn send(
        &self,
        sender_id: &str,
        send: SendMessageDto,
    ) -> Result<entity::message::Model, AppError> {
        if send.content.trim().is_empty() {
            return Err(AppError::BadRequest("Message content is required".to_string()));
        }

        let conversation_id = match send.conversation_id {
            Some(id) => id,
            None => {
                let (Some(vehicle_id), Some(renter_id), Some(owner_id)) =
                    (send.vehicle_id, send.renter_id, send.owner_id)
                else {
                    return Err(AppError::BadRequest(
                        "Missing required fields to create conversation".to_string(),
                    ));
                };

                ConversationService::new(self.db)
                    .create(sender_id, vehicle_id, &renter_id, &owner_id)
                    .await?
                    .id
            }
        };

        self.post(
            sender_id,
            conversation_id,
            send.content,
            send.message_type.unwrap_or(MessageType::Text),
            None,
        )
        .await
    }

    /// Posts an automated message as the host of the conversation.
    pub async fn send_system_message(
        &self,
        host_id: &str,
        conversation_id: i32,
        content: String,
    ) -> Result<entity::message::Model, AppError> {
        self.post(
            host_id,
            conversation_id,
            content,
            MessageType::System,
            Some(Party::Owner),
        )
        .await
    }

    /// Marks a received message read. Reading your own message changes nothing.
    pub async fn mark_read(
        &self,
        user_id: &str,
        message_id: i32,
    ) -> Result<entity::message::Model, AppError> {
        let message = self.find(message_id).await?;
        let (conversation, party) =
            participant_conversation(self.db, message.conversation_id, user_id).await?;

        if message.sender_id == user_id || message.is_read {
            return Ok(message);
        }

        let txn = self.db.begin().await?;
        let message = MessageRepository::new(&txn).mark_read(message).await?;
        ConversationRepository::new(&txn)
            .decrement_unread(conversation, party)
            .await?;
        txn.commit().await?;

        Ok(message)
    }

    /// Unread messages for the caller across their active conversations.
    pub async fn unread_count(&self, user_id: &str) -> Result<i64, AppError> {
        let conversations = ConversationRepository::new(self.db)
            .list_active_for_participant(user_id)
            .await?;

        Ok(conversations
            .iter()
            .filter_map(|c| {
                Party::of(user_id, &c.renter_id, &c.owner_id)
                    .map(|party| i64::from(unread_for(c, party)))
            })
            .sum())
    }

    pub async fn delete(&self, user_id: &str, message_id: i32) -> Result<(), AppError> {
        let message = self.find_own(user_id, message_id).await?;

        MessageRepository::new(self.db).delete(message.id).await?;
        Ok(())
    }

    /// Replaces the content of the caller's message if it is recent enough.
    pub async fn edit(
        &self,
        user_id: &str,
        message_id: i32,
        content: String,
    ) -> Result<entity::message::Model, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::BadRequest("Message content is required".to_string()));
        }

        let message = self.find_own(user_id, message_id).await?;
        if !within_edit_window(message.created_at, Utc::now()) {
            return Err(AppError::BadRequest(
                "Messages can only be edited within 15 minutes".to_string(),
            ));
        }

        Ok(MessageRepository::new(self.db)
            .update_content(message, content)
            .await?)
    }

    /// The host's owner-side conversations, archived ones included on request.
    pub async fn host_conversations(
        &self,
        host_id: &str,
        include_archived: bool,
    ) -> Result<Vec<ConversationSummary>, AppError> {
        let conversations = ConversationRepository::new(self.db)
            .list_for_user(host_id, Party::Owner, include_archived)
            .await?;

        summarize(self.db, conversations, Party::Owner).await
    }

    pub async fn host_stats(&self, host_id: &str) -> Result<HostMessageStatsDto, AppError> {
        let conversations = ConversationRepository::new(self.db)
            .list_for_user(host_id, Party::Owner, true)
            .await?;

        let active = conversations.iter().filter(|c| c.is_active).count() as u64;
        let unread: i64 = conversations
            .iter()
            .filter(|c| c.is_active)
            .map(|c| i64::from(c.unread_count_owner))
            .sum();

        let ids: Vec<i32> = conversations.iter().map(|c| c.id).collect();
        let messages = MessageRepository::new(self.db);
        let sent = messages.count_sent_by(ids.clone(), host_id).await?;
        let received = messages.count_received_by(ids, host_id).await?;

        Ok(HostMessageStatsDto {
            total_conversations: conversations.len() as u64,
            active_conversations: active,
            unread_messages: unread,
            messages_sent: sent,
            messages_received: received,
        })
    }

    /// Stores a message and updates the conversation's last-message fields in one
    /// transaction. `required` restricts which side may post.
    async fn post(
        &self,
        sender_id: &str,
        conversation_id: i32,
        content: String,
        message_type: MessageType,
        required: Option<Party>,
    ) -> Result<entity::message::Model, AppError> {
        let txn = self.db.begin().await?;

        let (conversation, party) =
            participant_conversation(&txn, conversation_id, sender_id).await?;
        if required.is_some_and(|required| required != party) {
            return Err(AppError::Forbidden(
                "Not authorized to send messages in this conversation".to_string(),
            ));
        }

        let message = MessageRepository::new(&txn)
            .create(conversation.id, sender_id, content, message_type)
            .await?;
        ConversationRepository::new(&txn)
            .record_message(conversation, party, &message)
            .await?;

        txn.commit().await?;

        Ok(message)
    }

    async fn find(&self, id: i32) -> Result<entity::message::Model, AppError> {
        MessageRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Message not found".to_string()))
    }

    async fn find_own(
        &self,
        user_id: &str,
        id: i32,
    ) -> Result<entity::message::Model, AppError> {
        let message = self.find(id).await?;
        if message.sender_id != user_id {
            return Err(AppError::Forbidden(
                "Only the sender can change this message".to_string(),
            ));
        }
        Ok(message)
    }
}
