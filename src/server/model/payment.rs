use entity::sea_orm_active_enums::PaymentStatus;

use crate::model::payment::{PaymentDto, PlatformSettingsDto};

impl From<entity::payment::Model> for PaymentDto {
    fn from(p: entity::payment::Model) -> Self {
        Self {
            id: p.id,
            reservation_id: p.reservation_id,
            renter_id: p.renter_id,
            owner_id: p.owner_id,
            amount: p.amount,
            platform_fee: p.platform_fee,
            owner_amount: p.owner_amount,
            currency: p.currency,
            status: p.status,
            stripe_payment_intent_id: p.stripe_payment_intent_id,
            stripe_charge_id: p.stripe_charge_id,
            refund_amount: p.refund_amount,
            refund_reason: p.refund_reason,
            failure_reason: p.failure_reason,
            metadata: p.metadata,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<entity::platform_settings::Model> for PlatformSettingsDto {
    fn from(s: entity::platform_settings::Model) -> Self {
        Self {
            id: s.id,
            platform_fee_percentage: s.platform_fee_percentage,
            minimum_platform_fee: s.minimum_platform_fee,
            maximum_platform_fee: s.maximum_platform_fee,
            is_active: s.is_active,
        }
    }
}

/// Local status for a processor intent status. `None` for states that need no change.
pub fn status_from_processor(status: &str, has_error: bool) -> Option<PaymentStatus> {
    match status {
        "succeeded" => Some(PaymentStatus::Succeeded),
        "processing" => Some(PaymentStatus::Processing),
        "canceled" => Some(PaymentStatus::Cancelled),
        "requires_payment_method" if has_error => Some(PaymentStatus::Failed),
        _ => None,
    }
}
