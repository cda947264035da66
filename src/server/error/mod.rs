//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every handler and service. It wraps
//! the domain specific errors (`AuthError`, `ConfigError`, `WebhookError`,
//! `PaymentError`) and the infrastructure errors raised by SeaORM, sessions and
//! reqwest, and maps each of them onto an HTTP status with a JSON `ErrorDto` body.

pub mod auth;
pub mod config;
pub mod payment;
pub mod webhook;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, payment::PaymentError, webhook::WebhookError,
    },
};

/// Top-level application error type.
///
/// Most variants convert automatically through `#[from]`. Domain errors that carry their
/// own status mapping (`AuthError`) delegate to it; the message carrying variants
/// (`NotFound`, `BadRequest`, `Forbidden`, `Conflict`) return their message verbatim.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup. Always 500.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error, mapped by `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Webhook authentication failure. Always 400.
    #[error(transparent)]
    WebhookErr(#[from] WebhookError),

    /// Payment processor failure. Always 502.
    #[error(transparent)]
    PaymentErr(#[from] PaymentError),

    /// Database operation error from SeaORM. 500 with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error. 500.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest. 500.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error. 500.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found. 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// The caller is authenticated but not a party allowed to perform the operation.
    ///
    /// 403 with the provided message.
    #[error("{0}")]
    Forbidden(String),

    /// The request conflicts with existing state (taken dates, duplicates). 409.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged and a generic one is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `BadRequest`, `WebhookErr`
/// - 403 Forbidden - `Forbidden`
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `Conflict`
/// - 502 Bad Gateway - `PaymentErr`
/// - Variable - `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - everything else
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Forbidden(msg) => error_response(StatusCode::FORBIDDEN, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            Self::WebhookErr(err) => {
                tracing::warn!("Rejected webhook: {}", err);
                error_response(StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::PaymentErr(err) => {
                tracing::error!("{}", err);
                error_response(
                    StatusCode::BAD_GATEWAY,
                    "Payment processor unavailable".to_string(),
                )
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

/// Wrapper that logs any displayable error and answers with a generic 500.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
