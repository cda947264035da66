use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const STRIPE_API_URL: &str = "https://api.stripe.com/v1";

/// Runtime configuration read from the environment.
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Public URL of the front end, used for post-login redirects and admin links.
    pub app_url: String,

    pub auth_client_id: String,
    pub auth_client_secret: String,
    pub auth_redirect_url: String,
    pub auth_authorize_url: String,
    pub auth_token_url: String,
    pub auth_userinfo_url: String,

    pub stripe_api_url: String,
    pub stripe_secret_key: String,
    pub stripe_webhook_secret: String,

    /// `whsec_` prefixed signing secret of the identity provider's webhooks.
    pub identity_webhook_secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            app_url: require("APP_URL")?,
            auth_client_id: require("AUTH_CLIENT_ID")?,
            auth_client_secret: require("AUTH_CLIENT_SECRET")?,
            auth_redirect_url: require("AUTH_REDIRECT_URL")?,
            auth_authorize_url: require("AUTH_AUTHORIZE_URL")?,
            auth_token_url: require("AUTH_TOKEN_URL")?,
            auth_userinfo_url: require("AUTH_USERINFO_URL")?,
            stripe_api_url: STRIPE_API_URL.to_string(),
            stripe_secret_key: require("STRIPE_SECRET_KEY")?,
            stripe_webhook_secret: require("STRIPE_WEBHOOK_SECRET")?,
            identity_webhook_secret: require("IDENTITY_WEBHOOK_SECRET")?,
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
