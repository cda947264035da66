use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{ReservationPaymentStatus, ReservationStatus};

/// Booking of a vehicle over an inclusive date range. Amounts are in cents.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vehicle_id: i32,
    pub renter_id: String,
    pub owner_id: String,
    pub start_date: Date,
    pub end_date: Date,
    pub pickup_time: Option<String>,
    pub dropoff_time: Option<String>,
    pub total_days: i32,
    pub daily_rate: i64,
    pub total_amount: i64,
    pub status: ReservationStatus,
    pub renter_message: Option<String>,
    pub owner_message: Option<String>,
    pub cancellation_reason: Option<String>,
    pub payment_id: Option<i32>,
    pub payment_status: Option<ReservationPaymentStatus>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Vehicle,
    #[sea_orm(has_one = "super::rental_completion::Entity")]
    RentalCompletion,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::rental_completion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RentalCompletion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
