//! Inbound webhooks from the payment processor and the identity provider.
//!
//! Both senders sign `<prefix>.<body>` with HMAC-SHA256. The payment processor sends a hex
//! digest in `Stripe-Signature: t=<ts>,v1=<hex>`; the identity provider follows the Svix
//! scheme with `svix-id`, `svix-timestamp` and a space separated list of `v1,<base64>`
//! signatures, keyed by the base64 part of a `whsec_` secret.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;
use sha2::Sha256;

use crate::server::{
    error::{webhook::WebhookError, AppError},
    model::user::IdentityUser,
    service::{
        payment::{record_failure, record_success},
        user::UserService,
    },
};

type HmacSha256 = Hmac<Sha256>;

/// Accepted clock skew between the sender's timestamp and ours, in seconds.
pub const SIGNATURE_TOLERANCE_SECS: i64 = 300;
const SVIX_SECRET_PREFIX: &str = "whsec_";

fn keyed_mac(key: &[u8]) -> Result<HmacSha256, WebhookError> {
    HmacSha256::new_from_slice(key).map_err(|_| WebhookError::InvalidSecret)
}

fn parse_timestamp(timestamp: &str) -> Result<i64, WebhookError> {
    timestamp
        .parse()
        .map_err(|_| WebhookError::MalformedSignature)
}

fn check_timestamp(timestamp: i64, now: i64) -> Result<(), WebhookError> {
    if (now - timestamp).abs() > SIGNATURE_TOLERANCE_SECS {
        return Err(WebhookError::TimestampOutOfTolerance);
    }
    Ok(())
}

/// Verifies a `Stripe-Signature` header against the raw request body.
pub fn verify_stripe_signature(
    secret: &str,
    header: &str,
    body: &[u8],
    now: i64,
) -> Result<(), WebhookError> {
    let mut timestamp = None;
    let mut signatures = Vec::new();
    for part in header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => timestamp = Some(value),
            Some(("v1", value)) => signatures.push(value),
            _ => {}
        }
    }

    let timestamp = timestamp.ok_or(WebhookError::MalformedSignature)?;
    if signatures.is_empty() {
        return Err(WebhookError::MalformedSignature);
    }
    check_timestamp(parse_timestamp(timestamp)?, now)?;

    // Signed over the header text as sent, not its parsed value.
    let mut mac = keyed_mac(secret.as_bytes())?;
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(body);

    let matched = signatures
        .iter()
        .filter_map(|sig| hex::decode(sig).ok())
        .any(|sig| mac.clone().verify_slice(&sig).is_ok());

    if matched {
        Ok(())
    } else {
        Err(WebhookError::SignatureMismatch)
    }
}

/// Verifies Svix style headers against the raw request body.
pub fn verify_svix_signature(
    secret: &str,
    id: &str,
    timestamp: &str,
    signature_header: &str,
    body: &[u8],
    now: i64,
) -> Result<(), WebhookError> {
    let key = secret.strip_prefix(SVIX_SECRET_PREFIX).unwrap_or(secret);
    let key = BASE64
        .decode(key)
        .map_err(|_| WebhookError::InvalidSecret)?;

    check_timestamp(parse_timestamp(timestamp)?, now)?;

    let mut mac = keyed_mac(&key)?;
    mac.update(id.as_bytes());
    mac.update(b".");
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(body);

    let matched = signature_header
        .split_whitespace()
        .filter_map(|entry| entry.split_once(','))
        .filter(|(version, _)| *version == "v1")
        .filter_map(|(_, sig)| BASE64.decode(sig).ok())
        .any(|sig| mac.clone().verify_slice(&sig).is_ok());

    if matched {
        Ok(())
    } else {
        Err(WebhookError::SignatureMismatch)
    }
}

#[derive(Debug, Deserialize)]
pub struct StripeEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: StripeEventData,
}

#[derive(Debug, Deserialize)]
pub struct StripeEventData {
    pub object: serde_json::Value,
}

/// Fields of a payment intent object carried by intent events.
#[derive(Debug, Deserialize)]
struct IntentObject {
    id: String,
    latest_charge: Option<String>,
    last_payment_error: Option<IntentError>,
}

#[derive(Debug, Deserialize)]
struct IntentError {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IdentityEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct DeletedObject {
    id: Option<String>,
}

fn parse_object<T: for<'de> Deserialize<'de>>(value: serde_json::Value) -> Result<T, AppError> {
    serde_json::from_value(value)
        .map_err(|e| WebhookError::InvalidPayload(e.to_string()).into())
}

pub struct WebhookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WebhookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies a verified payment processor event.
    ///
    /// Returns `false` when the event type is ignored or names an unknown intent.
    pub async fn handle_stripe_event(&self, event: StripeEvent) -> Result<bool, AppError> {
        tracing::info!("Received payment webhook {} ({})", event.event_type, event.id);

        match event.event_type.as_str() {
            "payment_intent.succeeded" => {
                let intent: IntentObject = parse_object(event.data.object)?;

                let txn = self.db.begin().await?;
                let processed = record_success(&txn, &intent.id, intent.latest_charge).await?;
                txn.commit().await?;

                if !processed {
                    tracing::warn!("No payment found for intent {}", intent.id);
                }
                Ok(processed)
            }
            "payment_intent.payment_failed" => {
                let intent: IntentObject = parse_object(event.data.object)?;
                let reason = intent.last_payment_error.and_then(|e| e.message);

                let txn = self.db.begin().await?;
                let processed = record_failure(&txn, &intent.id, reason).await?;
                txn.commit().await?;

                if !processed {
                    tracing::warn!("No payment found for intent {}", intent.id);
                }
                Ok(processed)
            }
            "charge.dispute.created" => {
                let charge = event
                    .data
                    .object
                    .get("charge")
                    .and_then(|c| c.as_str())
                    .unwrap_or("unknown");
                tracing::warn!("Dispute opened on charge {}", charge);
                Ok(true)
            }
            other => {
                tracing::debug!("Ignoring payment webhook {}", other);
                Ok(false)
            }
        }
    }

    /// Applies a verified identity provider event to the user table.
    pub async fn handle_identity_event(&self, event: IdentityEvent) -> Result<bool, AppError> {
        tracing::info!("Received identity webhook {}", event.event_type);

        let users = UserService::new(self.db);
        match event.event_type.as_str() {
            "user.created" | "user.updated" => {
                let data: IdentityUser = parse_object(event.data)?;
                users.upsert_from_identity(data).await?;
                Ok(true)
            }
            "user.deleted" => {
                let data: DeletedObject = parse_object(event.data)?;
                let Some(id) = data.id else {
                    return Err(WebhookError::InvalidPayload("missing user id".to_string()).into());
                };
                users.delete_from_identity(&id).await
            }
            other => {
                tracing::debug!("Ignoring identity webhook {}", other);
                Ok(false)
            }
        }
    }
}
