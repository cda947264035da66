//! Identity provider login flow.

use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{display_name, UpsertUserParam},
    state::OAuth2Client,
};

/// OpenID Connect userinfo claims used to build the local user.
#[derive(Debug, Deserialize)]
pub struct UserInfo {
    pub sub: String,
    pub name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub picture: Option<String>,
}

impl UserInfo {
    fn into_param(self, set_admin: bool) -> UpsertUserParam {
        let name = match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => display_name(self.given_name.as_deref(), self.family_name.as_deref()),
        };

        UpsertUserParam {
            external_id: self.sub,
            name,
            email: self.email,
            phone: self.phone_number,
            profile_image: self.picture,
            // Only written when granting, a regular login keeps the stored flag
            is_admin: set_admin.then_some(true),
        }
    }
}

/// Service for the OAuth2 authorization code flow against the identity provider.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub userinfo_url: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    /// Builds the provider's authorize URL and the CSRF state to store in the session.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .url()
    }

    /// Exchanges the authorization code, fetches the profile and upserts the user.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the provider's callback
    /// - `set_admin` - Grant admin to this user (admin bootstrap flow)
    ///
    /// # Returns
    /// - `Ok(user)` - The created or refreshed user
    /// - `Err(AppError::AuthErr)` - Token exchange failed
    /// - `Err(AppError::ReqwestErr)` - Userinfo request failed
    /// - `Err(AppError::DbErr)` - Upsert failed
    pub async fn callback(
        &self,
        authorization_code: String,
        set_admin: bool,
    ) -> Result<entity::user::Model, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let info = self.fetch_userinfo(&token).await?;
        let user = UserRepository::new(self.db)
            .upsert(info.into_param(set_admin))
            .await?;

        if set_admin {
            tracing::info!("User {} has been set as admin", user.name);
        }

        Ok(user)
    }

    async fn fetch_userinfo(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<UserInfo, AppError> {
        let info = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<UserInfo>()
            .await?;

        Ok(info)
    }
}
