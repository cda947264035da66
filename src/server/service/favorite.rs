use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::ToggleAction,
    server::{
        data::{favorite::FavoriteRepository, vehicle::VehicleRepository},
        error::AppError,
        model::favorite::FavoriteWithVehicle,
        service::vehicle::with_primary_images,
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The user's favorites with the listing card of each vehicle, newest first.
    pub async fn list(&self, user_id: &str) -> Result<Vec<FavoriteWithVehicle>, AppError> {
        let favorites = FavoriteRepository::new(self.db)
            .list_by_user(user_id)
            .await?;

        let vehicle_ids = favorites.iter().map(|f| f.vehicle_id).collect();
        let vehicles = VehicleRepository::new(self.db)
            .find_many_by_ids(vehicle_ids)
            .await?;
        let mut cards: HashMap<i32, _> = with_primary_images(self.db, vehicles)
            .await?
            .into_iter()
            .map(|card| (card.vehicle.id, card))
            .collect();

        Ok(favorites
            .into_iter()
            .map(|favorite| FavoriteWithVehicle {
                vehicle: cards.remove(&favorite.vehicle_id),
                favorite,
            })
            .collect())
    }

    pub async fn is_favorited(&self, user_id: &str, vehicle_id: i32) -> Result<bool, AppError> {
        Ok(FavoriteRepository::new(self.db)
            .find(user_id, vehicle_id)
            .await?
            .is_some())
    }

    /// Saves a listed vehicle to the user's favorites.
    ///
    /// # Returns
    /// - `Ok(favorite)` - The new favorite
    /// - `Err(AppError::NotFound)` - Vehicle missing, inactive or unapproved
    /// - `Err(AppError::Conflict)` - Vehicle already saved
    pub async fn add(
        &self,
        user_id: &str,
        vehicle_id: i32,
    ) -> Result<entity::favorite::Model, AppError> {
        VehicleRepository::new(self.db)
            .find_by_id(vehicle_id)
            .await?
            .filter(|v| v.is_active && v.is_approved)
            .ok_or_else(|| AppError::NotFound("Vehicle not found or not available".to_string()))?;

        let repo = FavoriteRepository::new(self.db);
        if repo.find(user_id, vehicle_id).await?.is_some() {
            return Err(AppError::Conflict(
                "Vehicle is already in favorites".to_string(),
            ));
        }

        Ok(repo.create(user_id, vehicle_id).await?)
    }

    pub async fn remove(&self, user_id: &str, vehicle_id: i32) -> Result<(), AppError> {
        let repo = FavoriteRepository::new(self.db);
        let favorite = repo
            .find(user_id, vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle is not in favorites".to_string()))?;

        repo.delete(favorite.id).await?;
        Ok(())
    }

    /// Removes the favorite when present, otherwise adds it.
    ///
    /// Returns the action taken and the id of the added favorite.
    pub async fn toggle(
        &self,
        user_id: &str,
        vehicle_id: i32,
    ) -> Result<(ToggleAction, Option<i32>), AppError> {
        let existing = FavoriteRepository::new(self.db)
            .find(user_id, vehicle_id)
            .await?;

        match existing {
            Some(favorite) => {
                FavoriteRepository::new(self.db).delete(favorite.id).await?;
                Ok((ToggleAction::Removed, None))
            }
            None => {
                let favorite = self.add(user_id, vehicle_id).await?;
                Ok((ToggleAction::Added, Some(favorite.id)))
            }
        }
    }

    pub async fn count(&self, user_id: &str) -> Result<u64, AppError> {
        Ok(FavoriteRepository::new(self.db)
            .count_by_user(user_id)
            .await?)
    }
}
