//! Payment repository.
//!
//! Rows mirror the processor's payment intents; the processor remains the source of truth
//! for money movement.

use chrono::Utc;
use entity::{json::PaymentMetadata, sea_orm_active_enums::PaymentStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// New payment for a reservation, amounts in cents.
#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub reservation_id: i32,
    pub renter_id: String,
    pub owner_id: String,
    pub amount: i64,
    pub platform_fee: i64,
    pub owner_amount: i64,
    pub currency: String,
    pub stripe_payment_intent_id: String,
    pub metadata: PaymentMetadata,
}

/// Fields changed when the processor reports on an intent. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct PaymentUpdate {
    pub status: Option<PaymentStatus>,
    pub stripe_charge_id: Option<String>,
    pub failure_reason: Option<String>,
    pub refund_amount: Option<i64>,
    pub refund_reason: Option<String>,
}

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a `pending` payment.
    pub async fn create(&self, params: CreatePaymentParams) -> Result<entity::payment::Model, DbErr> {
        let now = Utc::now();
        entity::payment::ActiveModel {
            reservation_id: ActiveValue::Set(params.reservation_id),
            renter_id: ActiveValue::Set(params.renter_id),
            owner_id: ActiveValue::Set(params.owner_id),
            amount: ActiveValue::Set(params.amount),
            platform_fee: ActiveValue::Set(params.platform_fee),
            owner_amount: ActiveValue::Set(params.owner_amount),
            currency: ActiveValue::Set(params.currency),
            status: ActiveValue::Set(PaymentStatus::Pending),
            stripe_payment_intent_id: ActiveValue::Set(Some(params.stripe_payment_intent_id)),
            stripe_charge_id: ActiveValue::Set(None),
            refund_amount: ActiveValue::Set(None),
            refund_reason: ActiveValue::Set(None),
            failure_reason: ActiveValue::Set(None),
            metadata: ActiveValue::Set(Some(params.metadata)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_intent_id(
        &self,
        intent_id: &str,
    ) -> Result<Option<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::StripePaymentIntentId.eq(intent_id))
            .one(self.db)
            .await
    }

    /// Payments where the user is renter or owner, newest first.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(
                Condition::any()
                    .add(entity::payment::Column::RenterId.eq(user_id))
                    .add(entity::payment::Column::OwnerId.eq(user_id)),
            )
            .order_by_desc(entity::payment::Column::CreatedAt)
            .order_by_desc(entity::payment::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        payment: entity::payment::Model,
        update: PaymentUpdate,
    ) -> Result<entity::payment::Model, DbErr> {
        let mut active = payment.into_active_model();
        if let Some(status) = update.status {
            active.status = ActiveValue::Set(status);
        }
        if update.stripe_charge_id.is_some() {
            active.stripe_charge_id = ActiveValue::Set(update.stripe_charge_id);
        }
        if update.failure_reason.is_some() {
            active.failure_reason = ActiveValue::Set(update.failure_reason);
        }
        if update.refund_amount.is_some() {
            active.refund_amount = ActiveValue::Set(update.refund_amount);
        }
        if update.refund_reason.is_some() {
            active.refund_reason = ActiveValue::Set(update.refund_reason);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }
}
