use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        payment::{CreatePaymentIntentDto, PaymentDto, PaymentIntentDto, RefundPaymentDto},
    },
    server::{
        controller::into_dtos, error::AppError, middleware::auth::AuthGuard,
        service::payment::PaymentService, state::AppState,
    },
};

pub static PAYMENT_TAG: &str = "payment";

/// Starts payment of a pending reservation.
///
/// Creates a payment intent with the processor for the reservation total and records a
/// pending payment with the platform fee split out. The browser completes the payment
/// with the returned client secret.
///
/// # Returns
/// - `201 Created` - Payment id, client secret and fee split
/// - `400 Bad Request` - Reservation is not pending
/// - `403 Forbidden` - Caller is not the renter
/// - `502 Bad Gateway` - The processor refused the intent
#[utoipa::path(
    post,
    path = "/api/payments/intent",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentIntentDto,
    responses(
        (status = 201, description = "Created payment intent", body = PaymentIntentDto),
        (status = 400, description = "Reservation is not awaiting payment", body = ErrorDto),
        (status = 403, description = "Caller is not the renter", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 502, description = "Payment processor error", body = ErrorDto)
    ),
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePaymentIntentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let created = PaymentService::new(&state.db, state.payment_gateway.as_ref())
        .create_intent(&user.external_id, payload.reservation_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PaymentIntentDto {
            payment_id: created.payment.id,
            client_secret: created.client_secret,
            amount: created.payment.amount,
            platform_fee: created.payment.platform_fee,
        }),
    ))
}

/// Payments where the caller is renter or owner, newest first.
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "Payments", body = Vec<PaymentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_payments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let payments = PaymentService::new(&state.db, state.payment_gateway.as_ref())
        .list_for_user(&user.external_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos::<_, PaymentDto>(payments))))
}

#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment id")),
    responses(
        (status = 200, description = "Payment", body = PaymentDto),
        (status = 403, description = "Caller is not a party to the payment", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto)
    ),
)]
pub async fn get_payment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let payment = PaymentService::new(&state.db, state.payment_gateway.as_ref())
        .get_by_id(&user.external_id, id)
        .await?;

    Ok((StatusCode::OK, Json(PaymentDto::from(payment))))
}

/// Syncs the payment with the processor's current intent state.
#[utoipa::path(
    post,
    path = "/api/payments/{id}/confirm",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment id")),
    responses(
        (status = 200, description = "Updated payment", body = PaymentDto),
        (status = 403, description = "Caller is not a party to the payment", body = ErrorDto),
        (status = 502, description = "Payment processor error", body = ErrorDto)
    ),
)]
pub async fn confirm_payment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let payment = PaymentService::new(&state.db, state.payment_gateway.as_ref())
        .confirm(&user.external_id, id)
        .await?;

    Ok((StatusCode::OK, Json(PaymentDto::from(payment))))
}

/// Owner refunds all or part of a captured payment.
///
/// Omitting `amount` refunds the full payment, which also cancels the reservation.
#[utoipa::path(
    post,
    path = "/api/payments/{id}/refund",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment id")),
    request_body = RefundPaymentDto,
    responses(
        (status = 200, description = "Refunded payment", body = PaymentDto),
        (status = 400, description = "Invalid refund", body = ErrorDto),
        (status = 403, description = "Caller is not the owner", body = ErrorDto),
        (status = 502, description = "Payment processor error", body = ErrorDto)
    ),
)]
pub async fn refund_payment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<RefundPaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let payment = PaymentService::new(&state.db, state.payment_gateway.as_ref())
        .refund(&user.external_id, id, payload.amount, payload.reason)
        .await?;

    Ok((StatusCode::OK, Json(PaymentDto::from(payment))))
}
