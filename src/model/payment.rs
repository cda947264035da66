use chrono::{DateTime, Utc};
use entity::{json::PaymentMetadata, sea_orm_active_enums::PaymentStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaymentDto {
    pub id: i32,
    pub reservation_id: i32,
    pub renter_id: String,
    pub owner_id: String,
    pub amount: i64,
    pub platform_fee: i64,
    pub owner_amount: i64,
    pub currency: String,
    #[schema(value_type = String)]
    pub status: PaymentStatus,
    pub stripe_payment_intent_id: Option<String>,
    pub stripe_charge_id: Option<String>,
    pub refund_amount: Option<i64>,
    pub refund_reason: Option<String>,
    pub failure_reason: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<PaymentMetadata>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreatePaymentIntentDto {
    pub reservation_id: i32,
}

/// Returned to the browser so it can confirm the card payment with the processor.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaymentIntentDto {
    pub payment_id: i32,
    pub client_secret: String,
    pub amount: i64,
    pub platform_fee: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct RefundPaymentDto {
    pub amount: Option<i64>,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PlatformSettingsDto {
    pub id: i32,
    pub platform_fee_percentage: f64,
    pub minimum_platform_fee: i64,
    pub maximum_platform_fee: Option<i64>,
    pub is_active: bool,
}

/// Outcome of a processed webhook event.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WebhookReceiptDto {
    pub received: bool,
    pub processed: bool,
}
