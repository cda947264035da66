use thiserror::Error;

/// Failures while authenticating an incoming webhook.
///
/// All variants result in 400 Bad Request so the sender retries or gives up according to
/// its own policy.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WebhookError {
    #[error("Missing webhook header: {0}")]
    MissingHeader(&'static str),

    #[error("Malformed webhook signature header")]
    MalformedSignature,

    #[error("Webhook timestamp outside of tolerance")]
    TimestampOutOfTolerance,

    #[error("No matching webhook signature")]
    SignatureMismatch,

    #[error("Invalid webhook secret")]
    InvalidSecret,

    #[error("Invalid webhook payload: {0}")]
    InvalidPayload(String),
}
