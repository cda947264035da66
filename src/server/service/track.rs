use sea_orm::DatabaseConnection;

use crate::{
    model::track::CreateTrackDto,
    server::{data::track::TrackRepository, error::AppError},
};

pub struct TrackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active tracks ordered by name.
    pub async fn list_active(&self) -> Result<Vec<entity::track::Model>, AppError> {
        Ok(TrackRepository::new(self.db).list_active().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<entity::track::Model, AppError> {
        TrackRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Track not found".to_string()))
    }

    pub async fn create(&self, track: CreateTrackDto) -> Result<entity::track::Model, AppError> {
        if track.name.trim().is_empty() {
            return Err(AppError::BadRequest("Track name is required".to_string()));
        }

        Ok(TrackRepository::new(self.db).create(track).await?)
    }
}
