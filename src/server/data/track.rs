use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::track::CreateTrackDto;

pub struct TrackRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrackRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Active tracks ordered by name.
    pub async fn list_active(&self) -> Result<Vec<entity::track::Model>, DbErr> {
        entity::prelude::Track::find()
            .filter(entity::track::Column::IsActive.eq(true))
            .order_by_asc(entity::track::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::track::Model>, DbErr> {
        entity::prelude::Track::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, track: CreateTrackDto) -> Result<entity::track::Model, DbErr> {
        entity::track::ActiveModel {
            name: ActiveValue::Set(track.name),
            location: ActiveValue::Set(track.location),
            description: ActiveValue::Set(track.description),
            image_url: ActiveValue::Set(track.image_url),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
