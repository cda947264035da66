mod model;
mod server;

use std::{net::SocketAddr, sync::Arc};

use crate::server::{
    config::Config,
    error::AppError,
    router,
    scheduler,
    service::{admin_code::AdminCodeService, payment::gateway::StripeGateway},
    startup,
    state::{AppState, WebhookSecrets},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let admin_code_service = AdminCodeService::new();
    startup::check_for_admin(&db, &config, &admin_code_service).await?;

    let payment_gateway = Arc::new(StripeGateway::new(
        http_client.clone(),
        config.stripe_api_url.clone(),
        config.stripe_secret_key.clone(),
    ));

    let _scheduler = scheduler::rental_completion::start_scheduler(db.clone()).await?;

    let state = AppState::new(
        db,
        http_client,
        oauth_client,
        config.auth_userinfo_url.clone(),
        admin_code_service,
        payment_gateway,
        WebhookSecrets {
            stripe: config.stripe_webhook_secret.clone(),
            identity: config.identity_webhook_secret.clone(),
        },
        config.app_url.clone(),
    );

    let app = router::router(&config.app_url)?
        .with_state(state)
        .layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Failed to bind {}: {}", config.bind_address, e))
        })?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
