use chrono::Utc;
use entity::sea_orm_active_enums::PaymentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for payment rows covering a reservation's full amount with a 5% fee.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    reservation: &'a entity::reservation::Model,
    status: PaymentStatus,
    intent_id: Option<String>,
    charge_id: Option<String>,
}

impl<'a> PaymentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, reservation: &'a entity::reservation::Model) -> Self {
        Self {
            db,
            reservation,
            status: PaymentStatus::Pending,
            intent_id: Some(format!("pi_{}", crate::factory::helpers::next_id())),
            charge_id: None,
        }
    }

    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn intent_id(mut self, intent_id: impl Into<String>) -> Self {
        self.intent_id = Some(intent_id.into());
        self
    }

    pub fn charge_id(mut self, charge_id: impl Into<String>) -> Self {
        self.charge_id = Some(charge_id.into());
        self
    }

    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        let now = Utc::now();
        let amount = self.reservation.total_amount;
        let platform_fee = (amount as f64 * 0.05).round() as i64;
        entity::payment::ActiveModel {
            reservation_id: ActiveValue::Set(self.reservation.id),
            renter_id: ActiveValue::Set(self.reservation.renter_id.clone()),
            owner_id: ActiveValue::Set(self.reservation.owner_id.clone()),
            amount: ActiveValue::Set(amount),
            platform_fee: ActiveValue::Set(platform_fee),
            owner_amount: ActiveValue::Set(amount - platform_fee),
            currency: ActiveValue::Set("usd".to_string()),
            status: ActiveValue::Set(self.status),
            stripe_payment_intent_id: ActiveValue::Set(self.intent_id),
            stripe_charge_id: ActiveValue::Set(self.charge_id),
            refund_amount: ActiveValue::Set(None),
            refund_reason: ActiveValue::Set(None),
            failure_reason: ActiveValue::Set(None),
            metadata: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
