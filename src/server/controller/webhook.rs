//! Signed callbacks from the payment processor and the identity provider.
//!
//! Signatures are checked against the raw body before it is parsed, so handlers take
//! [`Bytes`] instead of `Json`.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::{
    model::{api::ErrorDto, payment::WebhookReceiptDto},
    server::{
        error::{webhook::WebhookError, AppError},
        service::webhook::{
            verify_stripe_signature, verify_svix_signature, IdentityEvent, StripeEvent,
            WebhookService,
        },
        state::AppState,
    },
};

pub static WEBHOOK_TAG: &str = "webhook";

fn header<'h>(headers: &'h HeaderMap, name: &'static str) -> Result<&'h str, WebhookError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or(WebhookError::MissingHeader(name))
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, WebhookError> {
    serde_json::from_slice(body).map_err(|e| WebhookError::InvalidPayload(e.to_string()))
}

/// Payment processor events.
///
/// Verifies `Stripe-Signature` against the configured endpoint secret and applies payment
/// intent outcomes to payments and reservations.
///
/// # Returns
/// - `200 OK` - Event received; `processed` is false for ignored events
/// - `400 Bad Request` - Missing or invalid signature, or unparseable payload
#[utoipa::path(
    post,
    path = "/api/webhooks/stripe",
    tag = WEBHOOK_TAG,
    request_body(content = String, description = "Raw event JSON", content_type = "application/json"),
    responses(
        (status = 200, description = "Event received", body = WebhookReceiptDto),
        (status = 400, description = "Webhook rejected", body = ErrorDto)
    ),
)]
pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let signature = header(&headers, "Stripe-Signature")?;
    verify_stripe_signature(
        &state.webhook_secrets.stripe,
        signature,
        &body,
        Utc::now().timestamp(),
    )?;

    let event: StripeEvent = parse_body(&body)?;
    let processed = WebhookService::new(&state.db)
        .handle_stripe_event(event)
        .await?;

    Ok((
        StatusCode::OK,
        Json(WebhookReceiptDto {
            received: true,
            processed,
        }),
    ))
}

/// Identity provider user events, used to mirror user records.
#[utoipa::path(
    post,
    path = "/api/webhooks/identity",
    tag = WEBHOOK_TAG,
    request_body(content = String, description = "Raw event JSON", content_type = "application/json"),
    responses(
        (status = 200, description = "Event received", body = WebhookReceiptDto),
        (status = 400, description = "Webhook rejected", body = ErrorDto)
    ),
)]
pub async fn identity_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = header(&headers, "svix-id")?;
    let timestamp = header(&headers, "svix-timestamp")?;
    let signature = header(&headers, "svix-signature")?;
    verify_svix_signature(
        &state.webhook_secrets.identity,
        id,
        timestamp,
        signature,
        &body,
        Utc::now().timestamp(),
    )?;

    let event: IdentityEvent = parse_body(&body)?;
    let processed = WebhookService::new(&state.db)
        .handle_identity_event(event)
        .await?;

    Ok((
        StatusCode::OK,
        Json(WebhookReceiptDto {
            received: true,
            processed,
        }),
    ))
}
