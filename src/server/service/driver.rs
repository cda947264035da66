use entity::sea_orm_active_enums::UserType;
use sea_orm::DatabaseConnection;

use crate::{
    model::driver::{CreateDriverProfileDto, UpdateDriverProfileDto},
    server::{
        data::driver_profile::{DriverFilter, DriverProfileRepository},
        error::AppError,
        service::user::UserService,
    },
};

pub struct DriverService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DriverService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the caller's driver profile. A user has at most one.
    ///
    /// # Returns
    /// - `Ok(profile)` - The new profile
    /// - `Err(AppError::Conflict)` - The caller already has a profile
    pub async fn create(
        &self,
        user_id: &str,
        profile: CreateDriverProfileDto,
    ) -> Result<entity::driver_profile::Model, AppError> {
        let repo = DriverProfileRepository::new(self.db);
        if repo.find_by_user(user_id).await?.is_some() {
            return Err(AppError::Conflict(
                "Driver profile already exists".to_string(),
            ));
        }

        let created = repo.create(user_id, profile).await?;
        UserService::new(self.db)
            .take_role(user_id, UserType::Driver)
            .await?;

        Ok(created)
    }

    pub async fn list(
        &self,
        filter: DriverFilter,
    ) -> Result<Vec<entity::driver_profile::Model>, AppError> {
        Ok(DriverProfileRepository::new(self.db)
            .list_active(filter)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<entity::driver_profile::Model, AppError> {
        DriverProfileRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver profile not found".to_string()))
    }

    pub async fn get_by_user(
        &self,
        user_id: &str,
    ) -> Result<Option<entity::driver_profile::Model>, AppError> {
        Ok(DriverProfileRepository::new(self.db)
            .find_by_user(user_id)
            .await?)
    }

    pub async fn update(
        &self,
        user_id: &str,
        id: i32,
        update: UpdateDriverProfileDto,
    ) -> Result<entity::driver_profile::Model, AppError> {
        let profile = self.owned(user_id, id).await?;

        Ok(DriverProfileRepository::new(self.db)
            .update(profile, update)
            .await?)
    }

    pub async fn delete(&self, user_id: &str, id: i32) -> Result<(), AppError> {
        let profile = self.owned(user_id, id).await?;

        DriverProfileRepository::new(self.db)
            .delete(profile.id)
            .await?;
        Ok(())
    }

    async fn owned(
        &self,
        user_id: &str,
        id: i32,
    ) -> Result<entity::driver_profile::Model, AppError> {
        let profile = self.get_by_id(id).await?;
        if profile.user_id != user_id {
            return Err(AppError::Forbidden(
                "Not authorized to modify this driver profile".to_string(),
            ));
        }
        Ok(profile)
    }
}
