use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession, OAuthFlowSession},
        },
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct LoginParams {
    /// One-time code printed at startup while no admin exists.
    pub admin_code: Option<String>,
}

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Starts the identity provider login.
///
/// Stores a fresh CSRF token in the session and redirects to the provider's authorize
/// URL. A valid admin code marks the session so the callback grants admin.
///
/// # Returns
/// - `307 Temporary Redirect` - To the provider's authorize URL
/// - `500 Internal Server Error` - Session store failure
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    params(
        ("admin_code" = Option<String>, Query, description = "One-time admin bootstrap code")
    ),
    responses(
        (status = 307, description = "Redirect to the identity provider"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
    );

    if let Some(code) = params.admin_code {
        if state.admin_code_service.validate_and_consume(&code).await {
            OAuthFlowSession::new(&session).set_admin_flag(true).await?;
        } else {
            tracing::warn!("Login attempted with an invalid admin code");
        }
    }

    let (url, csrf_token) = auth_service.login_url();
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Completes the login started by [`login`].
///
/// # Returns
/// - `307 Temporary Redirect` - To the front end once the user is stored in the session
/// - `400 Bad Request` - CSRF state mismatch or failed code exchange
/// - `500 Internal Server Error` - Userinfo, database or session failure
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state echoed by the provider"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 307, description = "Redirect to the application"),
        (status = 400, description = "CSRF validation or code exchange failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
    );

    validate_csrf(&session, &params.state).await?;

    let set_admin = OAuthFlowSession::new(&session).take_admin_flag().await?;
    let user = auth_service.callback(params.code, set_admin).await?;

    AuthSession::new(&session)
        .set_user_id(&user.external_id)
        .await?;

    tracing::info!("User {} logged in", user.external_id);

    Ok(Redirect::temporary(&state.app_url))
}

/// Clears the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the application")
    ),
)]
pub async fn logout(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    Redirect::temporary(&state.app_url)
}

/// Returns the signed-in user.
///
/// # Returns
/// - `200 OK` - The current user
/// - `404 Not Found` - Nobody is signed in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed-in user", body = UserDto),
        (status = 404, description = "No user in session", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    match AuthGuard::new(&state.db, &session).require(&[]).await {
        Ok(user) => Ok((StatusCode::OK, Json(UserDto::from(user)))),
        Err(AppError::AuthErr(AuthError::UserNotInSession))
        | Err(AppError::AuthErr(AuthError::UserNotInDatabase(_))) => {
            Err(AppError::NotFound("User not found".to_string()))
        }
        Err(e) => Err(e),
    }
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if stored_state.as_deref() == Some(csrf_state) {
        return Ok(());
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
