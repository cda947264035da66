//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through Axum's
//! `State` extractor. It holds:
//! - the database connection pool
//! - the HTTP client used for identity provider requests
//! - the OAuth2 client for the identity provider login flow
//! - the admin code service used to bootstrap the first admin
//! - the payment gateway
//! - webhook signing secrets and the public application URL

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::service::{admin_code::AdminCodeService, payment::gateway::PaymentGateway};

/// OAuth2 client with the authorize and token endpoints configured.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Signing secrets for the two inbound webhooks.
#[derive(Clone)]
pub struct WebhookSecrets {
    /// Payment processor endpoint secret, used as raw HMAC key.
    pub stripe: String,
    /// Identity provider secret in `whsec_<base64>` form.
    pub identity: String,
}

/// Application state containing shared resources and dependencies.
///
/// Every field is cheap to clone: the connection and HTTP client are pools, the gateway is
/// behind an `Arc` and the admin code service shares its code through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// HTTP client for identity provider requests.
    ///
    /// Built without redirect following.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the identity provider login flow.
    pub oauth_client: OAuth2Client,

    /// URL returning the signed-in user's profile for an access token.
    pub userinfo_url: String,

    /// One-time codes granting admin on first login.
    pub admin_code_service: AdminCodeService,

    /// Payment processor client.
    pub payment_gateway: Arc<dyn PaymentGateway>,

    pub webhook_secrets: WebhookSecrets,

    /// Public URL of the front end.
    pub app_url: String,
}

impl AppState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        userinfo_url: String,
        admin_code_service: AdminCodeService,
        payment_gateway: Arc<dyn PaymentGateway>,
        webhook_secrets: WebhookSecrets,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
            admin_code_service,
            payment_gateway,
            webhook_secrets,
            app_url,
        }
    }
}
