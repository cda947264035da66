use serde_json::json;

use crate::server::{
    data::{payment::PaymentRepository, reservation::ReservationRepository, user::UserRepository},
    error::AppError,
    service::webhook::{IdentityEvent, StripeEvent, WebhookService},
};
use entity::sea_orm_active_enums::{PaymentStatus, ReservationPaymentStatus, ReservationStatus};
use test_utils::{builder::TestBuilder, factory};


fn stripe_event(event_type: &str, object: serde_json::Value) -> StripeEvent {
    serde_json::from_value(json!({
        "id": "evt_test",
        "type": event_type,
        "data": { "object": object },
    }))
    .unwrap()
}
