//! Reservation payments: fee split, processor intents, confirmation and refunds.
//!
//! Amounts are integer cents. The processor holds the money; rows here mirror the state of
//! each payment intent and drive the reservation's payment status.

pub mod gateway;

use std::collections::HashMap;

use entity::{
    json::PaymentMetadata,
    sea_orm_active_enums::{PaymentStatus, ReservationPaymentStatus, ReservationStatus},
};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        payment::{CreatePaymentParams, PaymentRepository, PaymentUpdate},
        platform_settings::PlatformSettingsRepository,
        reservation::ReservationRepository,
    },
    error::AppError,
    model::{
        fee::{FeeSchedule, DEFAULT_FEE_PERCENTAGE, DEFAULT_MAXIMUM_FEE, DEFAULT_MINIMUM_FEE},
        payment::status_from_processor,
    },
};

use self::gateway::{NewPaymentIntent, PaymentGateway};

const CURRENCY: &str = "usd";

/// A freshly created payment and the secret the browser confirms it with.
#[derive(Debug, Clone)]
pub struct CreatedIntent {
    pub payment: entity::payment::Model,
    pub client_secret: String,
}

/// Marks a payment succeeded and its reservation confirmed and paid.
///
/// Returns `false` when no payment mirrors `intent_id`.
pub(crate) async fn record_success<C: ConnectionTrait>(
    db: &C,
    intent_id: &str,
    charge_id: Option<String>,
) -> Result<bool, AppError> {
    let payments = PaymentRepository::new(db);
    let Some(payment) = payments.find_by_intent_id(intent_id).await? else {
        return Ok(false);
    };

    let payment = payments
        .update(
            payment,
            PaymentUpdate {
                status: Some(PaymentStatus::Succeeded),
                stripe_charge_id: charge_id,
                ..Default::default()
            },
        )
        .await?;

    ReservationRepository::new(db)
        .set_payment_outcome(
            payment.reservation_id,
            Some(ReservationStatus::Confirmed),
            ReservationPaymentStatus::Paid,
        )
        .await?;

    tracing::info!(
        "Payment {} succeeded, reservation {} confirmed",
        payment.id,
        payment.reservation_id
    );

    Ok(true)
}

/// Marks a payment failed with the processor's reason.
///
/// Returns `false` when no payment mirrors `intent_id`.
pub(crate) async fn record_failure<C: ConnectionTrait>(
    db: &C,
    intent_id: &str,
    reason: Option<String>,
) -> Result<bool, AppError> {
    let payments = PaymentRepository::new(db);
    let Some(payment) = payments.find_by_intent_id(intent_id).await? else {
        return Ok(false);
    };

    let payment = payments
        .update(
            payment,
            PaymentUpdate {
                status: Some(PaymentStatus::Failed),
                failure_reason: Some(reason.unwrap_or_else(|| "Payment failed".to_string())),
                ..Default::default()
            },
        )
        .await?;

    ReservationRepository::new(db)
        .set_payment_outcome(
            payment.reservation_id,
            None,
            ReservationPaymentStatus::Failed,
        )
        .await?;

    tracing::warn!("Payment {} failed", payment.id);

    Ok(true)
}

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn PaymentGateway,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a dyn PaymentGateway) -> Self {
        Self { db, gateway }
    }

    /// Fee rule from the active platform settings.
    pub async fn fee_schedule(&self) -> Result<FeeSchedule, AppError> {
        let settings = PlatformSettingsRepository::new(self.db).active().await?;
        Ok(FeeSchedule::from_settings(settings.as_ref()))
    }

    /// Writes the default settings row unless one is already active.
    pub async fn initialize_settings(
        &self,
    ) -> Result<entity::platform_settings::Model, AppError> {
        let repo = PlatformSettingsRepository::new(self.db);
        if let Some(settings) = repo.active().await? {
            return Ok(settings);
        }

        let settings = repo
            .create(
                DEFAULT_FEE_PERCENTAGE,
                DEFAULT_MINIMUM_FEE,
                Some(DEFAULT_MAXIMUM_FEE),
            )
            .await?;

        tracing::info!("Initialized platform settings");

        Ok(settings)
    }

    /// Starts payment of a pending reservation by its renter.
    ///
    /// # Returns
    /// - `Ok(created)` - Pending payment and the processor's client secret
    /// - `Err(AppError::NotFound)` - Reservation does not exist
    /// - `Err(AppError::Forbidden)` - Caller is not the renter
    /// - `Err(AppError::BadRequest)` - Reservation is not pending
    /// - `Err(AppError::PaymentErr)` - The processor refused the intent
    pub async fn create_intent(
        &self,
        renter_id: &str,
        reservation_id: i32,
    ) -> Result<CreatedIntent, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if reservation.renter_id != renter_id {
            return Err(AppError::Forbidden(
                "Not authorized to pay for this reservation".to_string(),
            ));
        }
        if reservation.status != ReservationStatus::Pending {
            return Err(AppError::BadRequest(
                "Reservation is not awaiting payment".to_string(),
            ));
        }

        let amount = reservation.total_amount;
        let (platform_fee, owner_amount) = self.fee_schedule().await?.split(amount);

        let metadata = HashMap::from([
            ("reservation_id".to_string(), reservation.id.to_string()),
            ("renter_id".to_string(), reservation.renter_id.clone()),
            ("owner_id".to_string(), reservation.owner_id.clone()),
            ("platform_fee".to_string(), platform_fee.to_string()),
        ]);
        let intent = self
            .gateway
            .create_payment_intent(NewPaymentIntent {
                amount,
                currency: CURRENCY.to_string(),
                metadata,
            })
            .await?;

        let client_secret = intent.client_secret.clone().ok_or_else(|| {
            AppError::InternalError("Payment intent has no client secret".to_string())
        })?;

        let txn = self.db.begin().await?;

        let payment = PaymentRepository::new(&txn)
            .create(CreatePaymentParams {
                reservation_id: reservation.id,
                renter_id: reservation.renter_id.clone(),
                owner_id: reservation.owner_id.clone(),
                amount,
                platform_fee,
                owner_amount,
                currency: CURRENCY.to_string(),
                stripe_payment_intent_id: intent.id,
                metadata: PaymentMetadata {
                    vehicle_id: reservation.vehicle_id,
                    start_date: reservation.start_date,
                    end_date: reservation.end_date,
                    total_days: reservation.total_days,
                },
            })
            .await?;
        ReservationRepository::new(&txn)
            .set_payment(reservation, payment.id, ReservationPaymentStatus::Pending)
            .await?;

        txn.commit().await?;

        Ok(CreatedIntent {
            payment,
            client_secret,
        })
    }

    /// Pulls the intent's state from the processor and records it.
    pub async fn confirm(
        &self,
        user_id: &str,
        payment_id: i32,
    ) -> Result<entity::payment::Model, AppError> {
        let payment = self.get_by_id(user_id, payment_id).await?;
        let intent_id = payment
            .stripe_payment_intent_id
            .clone()
            .ok_or_else(|| AppError::BadRequest("Payment has no payment intent".to_string()))?;

        let intent = self.gateway.retrieve_payment_intent(&intent_id).await?;

        let txn = self.db.begin().await?;
        let failure = intent.failure_message();
        match status_from_processor(&intent.status, failure.is_some()) {
            Some(PaymentStatus::Succeeded) => {
                record_success(&txn, &intent_id, intent.latest_charge).await?;
            }
            Some(PaymentStatus::Failed) => {
                record_failure(&txn, &intent_id, failure).await?;
            }
            Some(status) => {
                PaymentRepository::new(&txn)
                    .update(
                        payment,
                        PaymentUpdate {
                            status: Some(status),
                            ..Default::default()
                        },
                    )
                    .await?;
            }
            None => {}
        }
        txn.commit().await?;

        self.get_by_id(user_id, payment_id).await
    }

    /// Refunds part or all of what remains of a captured payment on the owner's request.
    ///
    /// Refunds accumulate in `refund_amount`. The payment is `partially_refunded` while the
    /// total is below the charged amount; once it reaches it the payment is `refunded` and
    /// the reservation cancelled. Omitting `amount` refunds the remainder.
    pub async fn refund(
        &self,
        owner_id: &str,
        payment_id: i32,
        amount: Option<i64>,
        reason: Option<String>,
    ) -> Result<entity::payment::Model, AppError> {
        let payment = PaymentRepository::new(self.db)
            .find_by_id(payment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        if payment.owner_id != owner_id {
            return Err(AppError::Forbidden(
                "Only the vehicle owner can refund this payment".to_string(),
            ));
        }
        if payment.status == PaymentStatus::Refunded {
            return Err(AppError::BadRequest(
                "Payment is already fully refunded".to_string(),
            ));
        }
        let charge_id = payment
            .stripe_charge_id
            .clone()
            .ok_or_else(|| AppError::BadRequest("Payment has no charge to refund".to_string()))?;

        let already = payment.refund_amount.unwrap_or(0);
        let remaining = payment.amount - already;
        let refund_amount = amount.unwrap_or(remaining);
        if refund_amount <= 0 || refund_amount > remaining {
            return Err(AppError::BadRequest("Invalid refund amount".to_string()));
        }
        let total_refunded = already + refund_amount;
        let fully_refunded = total_refunded >= payment.amount;

        self.gateway
            .create_refund(&charge_id, Some(refund_amount), reason.clone())
            .await?;

        let txn = self.db.begin().await?;

        let reservation_id = payment.reservation_id;
        let status = if fully_refunded {
            PaymentStatus::Refunded
        } else {
            PaymentStatus::PartiallyRefunded
        };
        let payment = PaymentRepository::new(&txn)
            .update(
                payment,
                PaymentUpdate {
                    status: Some(status),
                    refund_amount: Some(total_refunded),
                    refund_reason: reason,
                    ..Default::default()
                },
            )
            .await?;

        if fully_refunded {
            ReservationRepository::new(&txn)
                .set_payment_outcome(
                    reservation_id,
                    Some(ReservationStatus::Cancelled),
                    ReservationPaymentStatus::Refunded,
                )
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Refunded {} cents of payment {} ({} of {} refunded)",
            refund_amount,
            payment.id,
            total_refunded,
            payment.amount
        );

        Ok(payment)
    }

    pub async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<entity::payment::Model>, AppError> {
        Ok(PaymentRepository::new(self.db)
            .list_for_user(user_id)
            .await?)
    }

    pub async fn get_by_id(
        &self,
        user_id: &str,
        id: i32,
    ) -> Result<entity::payment::Model, AppError> {
        let payment = PaymentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        if payment.renter_id != user_id && payment.owner_id != user_id {
            return Err(AppError::Forbidden(
                "Not authorized to view this payment".to_string(),
            ));
        }

        Ok(payment)
    }
}
