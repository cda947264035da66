//! Conversation repository.
//!
//! A conversation is unique per (vehicle, renter, owner) and carries denormalized
//! last-message fields plus one unread counter per side.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::party::Party;

pub struct ConversationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConversationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::conversation::Model>, DbErr> {
        entity::prelude::Conversation::find_by_id(id).one(self.db).await
    }

    pub async fn find(
        &self,
        vehicle_id: i32,
        renter_id: &str,
        owner_id: &str,
    ) -> Result<Option<entity::conversation::Model>, DbErr> {
        entity::prelude::Conversation::find()
            .filter(entity::conversation::Column::VehicleId.eq(vehicle_id))
            .filter(entity::conversation::Column::RenterId.eq(renter_id))
            .filter(entity::conversation::Column::OwnerId.eq(owner_id))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        vehicle_id: i32,
        renter_id: &str,
        owner_id: &str,
    ) -> Result<entity::conversation::Model, DbErr> {
        let now = Utc::now();
        entity::conversation::ActiveModel {
            vehicle_id: ActiveValue::Set(vehicle_id),
            renter_id: ActiveValue::Set(renter_id.to_string()),
            owner_id: ActiveValue::Set(owner_id.to_string()),
            last_message_at: ActiveValue::Set(now),
            last_message_text: ActiveValue::Set(None),
            last_message_sender_id: ActiveValue::Set(None),
            unread_count_renter: ActiveValue::Set(0),
            unread_count_owner: ActiveValue::Set(0),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Conversations on `party`'s side, most recent activity first.
    pub async fn list_for_user(
        &self,
        user_id: &str,
        party: Party,
        include_archived: bool,
    ) -> Result<Vec<entity::conversation::Model>, DbErr> {
        let mut query =
            entity::prelude::Conversation::find().filter(party_column(party).eq(user_id));

        if !include_archived {
            query = query.filter(entity::conversation::Column::IsActive.eq(true));
        }

        query
            .order_by_desc(entity::conversation::Column::LastMessageAt)
            .all(self.db)
            .await
    }

    /// Active conversations where the user is on either side.
    pub async fn list_active_for_participant(
        &self,
        user_id: &str,
    ) -> Result<Vec<entity::conversation::Model>, DbErr> {
        entity::prelude::Conversation::find()
            .filter(
                Condition::any()
                    .add(entity::conversation::Column::RenterId.eq(user_id))
                    .add(entity::conversation::Column::OwnerId.eq(user_id)),
            )
            .filter(entity::conversation::Column::IsActive.eq(true))
            .all(self.db)
            .await
    }

    /// Owner-side conversations created at or after `since`.
    pub async fn list_for_owner_since(
        &self,
        owner_id: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<entity::conversation::Model>, DbErr> {
        entity::prelude::Conversation::find()
            .filter(entity::conversation::Column::OwnerId.eq(owner_id))
            .filter(entity::conversation::Column::CreatedAt.gte(since))
            .all(self.db)
            .await
    }

    /// Updates the last-message fields and bumps the recipient side's unread counter.
    pub async fn record_message(
        &self,
        conversation: entity::conversation::Model,
        sender: Party,
        message: &entity::message::Model,
    ) -> Result<entity::conversation::Model, DbErr> {
        let unread_renter = conversation.unread_count_renter;
        let unread_owner = conversation.unread_count_owner;

        let mut active = conversation.into_active_model();
        active.last_message_at = ActiveValue::Set(message.created_at);
        active.last_message_text = ActiveValue::Set(Some(message.content.clone()));
        active.last_message_sender_id = ActiveValue::Set(Some(message.sender_id.clone()));
        match sender.other() {
            Party::Renter => active.unread_count_renter = ActiveValue::Set(unread_renter + 1),
            Party::Owner => active.unread_count_owner = ActiveValue::Set(unread_owner + 1),
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Sets `party`'s unread counter to zero.
    pub async fn reset_unread(
        &self,
        conversation: entity::conversation::Model,
        party: Party,
    ) -> Result<entity::conversation::Model, DbErr> {
        let mut active = conversation.into_active_model();
        match party {
            Party::Renter => active.unread_count_renter = ActiveValue::Set(0),
            Party::Owner => active.unread_count_owner = ActiveValue::Set(0),
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Lowers `party`'s unread counter by one, never below zero.
    pub async fn decrement_unread(
        &self,
        conversation: entity::conversation::Model,
        party: Party,
    ) -> Result<entity::conversation::Model, DbErr> {
        let unread_renter = conversation.unread_count_renter;
        let unread_owner = conversation.unread_count_owner;

        let mut active = conversation.into_active_model();
        match party {
            Party::Renter => {
                active.unread_count_renter = ActiveValue::Set((unread_renter - 1).max(0))
            }
            Party::Owner => active.unread_count_owner = ActiveValue::Set((unread_owner - 1).max(0)),
        }

        active.update(self.db).await
    }

    pub async fn set_active(
        &self,
        conversation: entity::conversation::Model,
        is_active: bool,
    ) -> Result<entity::conversation::Model, DbErr> {
        let mut active = conversation.into_active_model();
        active.is_active = ActiveValue::Set(is_active);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Deletes the conversation and its messages.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Message::delete_many()
            .filter(entity::message::Column::ConversationId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::Conversation::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}

fn party_column(party: Party) -> entity::conversation::Column {
    match party {
        Party::Renter => entity::conversation::Column::RenterId,
        Party::Owner => entity::conversation::Column::OwnerId,
    }
}
