use sea_orm::entity::prelude::*;

use crate::{json::PaymentMetadata, sea_orm_active_enums::PaymentStatus};

/// Payment collected for a reservation. All amounts are in the smallest currency unit.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub reservation_id: i32,
    pub renter_id: String,
    pub owner_id: String,
    pub amount: i64,
    pub platform_fee: i64,
    pub owner_amount: i64,
    pub currency: String,
    pub status: PaymentStatus,
    pub stripe_payment_intent_id: Option<String>,
    pub stripe_charge_id: Option<String>,
    pub refund_amount: Option<i64>,
    pub refund_reason: Option<String>,
    pub failure_reason: Option<String>,
    pub metadata: Option<PaymentMetadata>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reservation::Entity",
        from = "Column::ReservationId",
        to = "super::reservation::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Reservation,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
