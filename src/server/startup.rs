use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{fmt, EnvFilter};

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    service::admin_code::AdminCodeService,
    state::OAuth2Client,
};

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up to date before
/// any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// Sessions expire after seven days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let store = SqliteStore::new(pool.clone());

    store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// HTTP client for the identity provider and payment processor.
///
/// Redirects are not followed so a token endpoint can never bounce credentials elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.auth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.auth_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.auth_authorize_url.clone())
                .map_err(|e| invalid_url("AUTH_AUTHORIZE_URL", e))?,
        )
        .set_token_uri(
            TokenUrl::new(config.auth_token_url.clone())
                .map_err(|e| invalid_url("AUTH_TOKEN_URL", e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.auth_redirect_url.clone())
                .map_err(|e| invalid_url("AUTH_REDIRECT_URL", e))?,
        );

    Ok(client)
}

fn invalid_url(name: &str, err: url::ParseError) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: err.to_string(),
    }
}

/// Logs a one-time admin login link when no admin exists yet.
///
/// The link carries a code from [`AdminCodeService`]; signing in through it grants admin
/// rights to that user.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    config: &Config,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.generate().await;
    tracing::info!(
        "No admin user found. Sign in within 60 seconds to become admin: {}/api/auth/login?admin_code={}",
        config.app_url.trim_end_matches('/'),
        code
    );

    Ok(())
}
