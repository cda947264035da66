//! User profiles and their synchronisation with the identity provider.

use entity::sea_orm_active_enums::UserType;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::UpdateProfileDto,
    server::{
        data::{review::ReviewRepository, user::UserRepository},
        error::AppError,
        model::{
            review::{average_rating, ReviewRole},
            user::{merged_user_type, IdentityUser, UpsertUserParam},
        },
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<entity::user::Model>, AppError> {
        Ok(UserRepository::new(self.db)
            .find_by_external_id(external_id)
            .await?)
    }

    /// Creates or refreshes a user from an identity provider webhook payload.
    pub async fn upsert_from_identity(
        &self,
        data: IdentityUser,
    ) -> Result<entity::user::Model, AppError> {
        Ok(UserRepository::new(self.db).upsert(data.into()).await?)
    }

    /// Removes the user. Logs and returns `false` when no such user exists.
    pub async fn delete_from_identity(&self, external_id: &str) -> Result<bool, AppError> {
        let deleted = UserRepository::new(self.db)
            .delete_by_external_id(external_id)
            .await?;

        if !deleted {
            tracing::warn!(
                "Can't delete user, there is none for identity provider id {}",
                external_id
            );
        }

        Ok(deleted)
    }

    /// Updates the caller's profile, creating the user first when missing.
    pub async fn update_profile(
        &self,
        external_id: &str,
        profile: UpdateProfileDto,
    ) -> Result<entity::user::Model, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_external_id(external_id).await? else {
            let user = repo
                .upsert(UpsertUserParam {
                    external_id: external_id.to_string(),
                    name: profile.name.unwrap_or_else(|| "Unknown User".to_string()),
                    email: profile.email,
                    phone: profile.phone,
                    ..Default::default()
                })
                .await?;
            return Ok(user);
        };

        Ok(repo
            .update_profile(user, profile.name, profile.email, profile.phone)
            .await?)
    }

    pub async fn update_profile_image(
        &self,
        external_id: &str,
        image_url: String,
    ) -> Result<entity::user::Model, AppError> {
        let repo = UserRepository::new(self.db);

        let user = match repo.find_by_external_id(external_id).await? {
            Some(user) => user,
            None => {
                repo.upsert(UpsertUserParam {
                    external_id: external_id.to_string(),
                    name: "Unknown User".to_string(),
                    ..Default::default()
                })
                .await?
            }
        };

        Ok(repo.update_profile_image(user, image_url).await?)
    }

    /// Records that the user acts as `role`, keeping an earlier role as `both`.
    ///
    /// No-op when the user does not exist.
    pub async fn take_role(&self, external_id: &str, role: UserType) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);
        let Some(user) = repo.find_by_external_id(external_id).await? else {
            return Ok(());
        };

        let user_type = merged_user_type(user.user_type, role);
        if user.user_type != Some(user_type) {
            repo.set_user_type(user, user_type).await?;
        }

        Ok(())
    }

    /// Recomputes the user's rating from the public reviews they received.
    ///
    /// # Returns
    /// - `Ok(Some(rating))` - Average rounded to one decimal
    /// - `Ok(None)` - No public reviews, rating cleared
    pub async fn update_rating(&self, external_id: &str) -> Result<Option<f64>, AppError> {
        let reviews = ReviewRepository::new(self.db)
            .list_public_for_user(external_id, ReviewRole::Reviewed)
            .await?;
        let ratings: Vec<i32> = reviews.iter().map(|r| r.rating).collect();
        let rating = average_rating(&ratings);

        UserRepository::new(self.db)
            .set_rating(external_id, rating)
            .await?;

        Ok(rating)
    }
}
