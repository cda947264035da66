use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for track rows. Defaults to an active track named `Track {n}`.
pub struct TrackFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location: String,
    is_active: bool,
}

impl<'a> TrackFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Track {}", next_id()),
            location: "Willow Springs, CA".to_string(),
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::track::Model, DbErr> {
        entity::track::ActiveModel {
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(self.location),
            description: ActiveValue::Set(None),
            image_url: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_track(db: &DatabaseConnection) -> Result<entity::track::Model, DbErr> {
    TrackFactory::new(db).build().await
}
