use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The caller never logged in or the session expired. Results in 401 Unauthorized.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Happens after the identity provider deleted the account. Results in 401 Unauthorized.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(String),

    /// The user lacks a required permission.
    ///
    /// # Fields
    /// - External id of the user
    /// - Description of what was attempted, logged but never returned to the client
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state parameter does not match the token stored in the session. Results in
    /// 400 Bad Request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code with the identity provider failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `CsrfValidationFailed` / `TokenExchange` → 400 Bad Request
///
/// Details are logged at debug level; client messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not authenticated")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
            Self::CsrfValidationFailed | Self::TokenExchange(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
