//! Conversations between a renter and a vehicle owner, plus host inbox tools.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::conversation::{AnalyticsRange, BulkAction, HostAnalyticsDto},
    server::{
        data::{
            conversation::ConversationRepository, message::MessageRepository,
            user::UserRepository, vehicle::VehicleRepository,
        },
        error::AppError,
        model::{
            conversation::{host_response_minutes, unread_for, ConversationSummary},
            party::Party,
        },
    },
};

/// Loads a conversation and the caller's side of it.
pub(crate) async fn participant_conversation<C: ConnectionTrait>(
    db: &C,
    conversation_id: i32,
    user_id: &str,
) -> Result<(entity::conversation::Model, Party), AppError> {
    let conversation = ConversationRepository::new(db)
        .find_by_id(conversation_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Conversation not found".to_string()))?;

    match Party::of(user_id, &conversation.renter_id, &conversation.owner_id) {
        Some(party) => Ok((conversation, party)),
        None => Err(AppError::Forbidden(
            "Not authorized to access this conversation".to_string(),
        )),
    }
}

/// Attaches the vehicle and the other participant to each conversation.
pub(crate) async fn summarize<C: ConnectionTrait>(
    db: &C,
    conversations: Vec<entity::conversation::Model>,
    party: Party,
) -> Result<Vec<ConversationSummary>, AppError> {
    let vehicle_ids = conversations.iter().map(|c| c.vehicle_id).collect();
    let vehicles: HashMap<i32, entity::vehicle::Model> = VehicleRepository::new(db)
        .find_many_by_ids(vehicle_ids)
        .await?
        .into_iter()
        .map(|v| (v.id, v))
        .collect();

    let other_id = |c: &entity::conversation::Model| match party {
        Party::Renter => c.owner_id.clone(),
        Party::Owner => c.renter_id.clone(),
    };
    let user_ids = conversations.iter().map(other_id).collect();
    let users: HashMap<String, entity::user::Model> = UserRepository::new(db)
        .find_many_by_external_ids(user_ids)
        .await?
        .into_iter()
        .map(|u| (u.external_id.clone(), u))
        .collect();

    Ok(conversations
        .into_iter()
        .map(|conversation| ConversationSummary {
            vehicle: vehicles.get(&conversation.vehicle_id).cloned(),
            other_party: users.get(&other_id(&conversation)).cloned(),
            unread_count: unread_for(&conversation, party),
            conversation,
        })
        .collect())
}

pub struct ConversationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConversationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active conversations on the caller's `party` side, most recent activity first.
    pub async fn list_for_user(
        &self,
        user_id: &str,
        party: Party,
    ) -> Result<Vec<ConversationSummary>, AppError> {
        let conversations = ConversationRepository::new(self.db)
            .list_for_user(user_id, party, false)
            .await?;

        summarize(self.db, conversations, party).await
    }

    pub async fn get_by_id(
        &self,
        user_id: &str,
        id: i32,
    ) -> Result<ConversationSummary, AppError> {
        let (conversation, party) = participant_conversation(self.db, id, user_id).await?;

        let mut summaries = summarize(self.db, vec![conversation], party).await?;
        summaries
            .pop()
            .ok_or_else(|| AppError::NotFound("Conversation not found".to_string()))
    }

    pub async fn find(
        &self,
        vehicle_id: i32,
        renter_id: &str,
        owner_id: &str,
    ) -> Result<Option<entity::conversation::Model>, AppError> {
        Ok(ConversationRepository::new(self.db)
            .find(vehicle_id, renter_id, owner_id)
            .await?)
    }

    /// Opens a conversation, or returns the one that already exists for the three ids.
    pub async fn create(
        &self,
        user_id: &str,
        vehicle_id: i32,
        renter_id: &str,
        owner_id: &str,
    ) -> Result<entity::conversation::Model, AppError> {
        if Party::of(user_id, renter_id, owner_id).is_none() {
            return Err(AppError::Forbidden(
                "Not authorized to create this conversation".to_string(),
            ));
        }

        let repo = ConversationRepository::new(self.db);
        if let Some(existing) = repo.find(vehicle_id, renter_id, owner_id).await? {
            return Ok(existing);
        }

        VehicleRepository::new(self.db)
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(repo.create(vehicle_id, renter_id, owner_id).await?)
    }

    /// Zeroes the caller's unread counter and marks the other side's messages read.
    pub async fn mark_read(&self, user_id: &str, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let (conversation, party) = participant_conversation(&txn, id, user_id).await?;
        MessageRepository::new(&txn)
            .mark_read_for_reader(conversation.id, user_id)
            .await?;
        ConversationRepository::new(&txn)
            .reset_unread(conversation, party)
            .await?;

        txn.commit().await?;
        Ok(())
    }

    pub async fn archive(
        &self,
        user_id: &str,
        id: i32,
    ) -> Result<entity::conversation::Model, AppError> {
        let (conversation, _) = participant_conversation(self.db, id, user_id).await?;

        Ok(ConversationRepository::new(self.db)
            .set_active(conversation, false)
            .await?)
    }

    /// Deletes the conversation along with its messages.
    pub async fn delete(&self, user_id: &str, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let (conversation, _) = participant_conversation(&txn, id, user_id).await?;
        ConversationRepository::new(&txn)
            .delete(conversation.id)
            .await?;

        txn.commit().await?;
        Ok(())
    }

    /// Inbox metrics for conversations the host opened within `range`.
    pub async fn host_analytics(
        &self,
        host_id: &str,
        range: AnalyticsRange,
    ) -> Result<HostAnalyticsDto, AppError> {
        let conversations = ConversationRepository::new(self.db)
            .list_for_owner_since(host_id, range.since(Utc::now()))
            .await?;

        let active = conversations.iter().filter(|c| c.is_active).count() as u64;
        let unread: i64 = conversations
            .iter()
            .map(|c| i64::from(c.unread_count_owner))
            .sum();

        let ids = conversations.iter().map(|c| c.id).collect();
        let messages = MessageRepository::new(self.db)
            .list_by_conversations(ids)
            .await?;

        let mut by_conversation: HashMap<i32, Vec<entity::message::Model>> = HashMap::new();
        for message in messages {
            by_conversation
                .entry(message.conversation_id)
                .or_default()
                .push(message);
        }

        let responses: Vec<f64> = by_conversation
            .values()
            .flat_map(|thread| host_response_minutes(thread, host_id))
            .collect();
        let average_response_minutes = (!responses.is_empty())
            .then(|| (responses.iter().sum::<f64>() / responses.len() as f64).round());

        Ok(HostAnalyticsDto {
            total_conversations: conversations.len() as u64,
            active_conversations: active,
            archived_conversations: conversations.len() as u64 - active,
            unread_messages: unread,
            average_response_minutes,
            response_count: responses.len() as u64,
        })
    }

    /// Applies `action` to each of the host's conversations.
    ///
    /// Ids that do not exist are skipped. Returns the ids that were processed.
    ///
    /// # Returns
    /// - `Ok(ids)` - Processed conversation ids in request order
    /// - `Err(AppError::Forbidden)` - One of the conversations belongs to another host
    pub async fn bulk_action(
        &self,
        host_id: &str,
        ids: Vec<i32>,
        action: BulkAction,
    ) -> Result<Vec<i32>, AppError> {
        let txn = self.db.begin().await?;
        let conversations = ConversationRepository::new(&txn);
        let messages = MessageRepository::new(&txn);

        let mut processed = Vec::with_capacity(ids.len());
        for id in ids {
            let Some(conversation) = conversations.find_by_id(id).await? else {
                continue;
            };

            if conversation.owner_id != host_id {
                return Err(AppError::Forbidden(
                    "Not authorized to perform this action on this conversation".to_string(),
                ));
            }

            match action {
                BulkAction::Archive => {
                    conversations.set_active(conversation, false).await?;
                }
                BulkAction::Unarchive => {
                    conversations.set_active(conversation, true).await?;
                }
                BulkAction::MarkRead => {
                    messages.mark_read_for_reader(id, host_id).await?;
                    conversations.reset_unread(conversation, Party::Owner).await?;
                }
                BulkAction::Delete => {
                    conversations.delete(id).await?;
                }
            }

            processed.push(id);
        }

        txn.commit().await?;

        tracing::info!(
            "Bulk {:?} applied to {} conversations for host {}",
            action,
            processed.len(),
            host_id
        );

        Ok(processed)
    }
}
