use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

pub enum Permission {
    Admin,
}

/// Resolves the signed-in user from the session and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the signed-in user if they hold every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(user)` - Signed in and permitted
    /// - `Err(AuthError::UserNotInSession)` - Nobody is signed in
    /// - `Err(AuthError::UserNotInDatabase)` - The session outlived the user record
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let Some(external_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_external_id(&external_id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(external_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            external_id,
                            "admin permission required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
