//! Typed wrappers over the tower-sessions `Session`.
//!
//! Each wrapper exposes only the keys of one concern:
//! - `AuthSession` - the signed-in user's external id
//! - `CsrfSession` - the OAuth state token
//! - `OAuthFlowSession` - the admin bootstrap flag carried across the provider redirect

use tower_sessions::Session;

use crate::server::error::AppError;

pub(crate) const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_AUTH_SET_ADMIN: &str = "auth:set_admin";

pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the identity provider subject of the signed-in user.
    pub async fn set_user_id(&self, external_id: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, external_id.to_string())
            .await?;
        Ok(())
    }

    /// Returns the signed-in user's external id, or `None` when nobody is logged in.
    pub async fn get_user_id(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_USER_ID).await?)
    }

    /// Drops all session data, including any pending OAuth flow state.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Removes and returns the stored token. Each token validates a single callback.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?)
    }
}

pub struct OAuthFlowSession<'a> {
    session: &'a Session,
}

impl<'a> OAuthFlowSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks the flow so the callback grants admin to whoever completes it.
    pub async fn set_admin_flag(&self, set_admin: bool) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_SET_ADMIN, set_admin)
            .await?;
        Ok(())
    }

    pub async fn take_admin_flag(&self) -> Result<bool, AppError> {
        Ok(self
            .session
            .remove(SESSION_AUTH_SET_ADMIN)
            .await?
            .unwrap_or(false))
    }
}
