use sea_orm::entity::prelude::*;

use crate::{
    json::{OwnerReturnReview, RenterReturnForm},
    sea_orm_active_enums::CompletionStatus,
};

/// Post-rental return workflow, one per reservation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rental_completion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub reservation_id: i32,
    pub vehicle_id: i32,
    pub renter_id: String,
    pub owner_id: String,
    pub status: CompletionStatus,
    pub renter_return_form: Option<RenterReturnForm>,
    pub owner_return_review: Option<OwnerReturnReview>,
    pub completion_notes: Option<String>,
    pub completed_at: Option<DateTimeUtc>,
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
    #[sea_orm(has_many = "super::vehicle_vitals::Entity")]
    VehicleVitals,
    #[sea_orm(has_many = "super::rental_review::Entity")]
    RentalReview,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::vehicle_vitals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleVitals.def()
    }
}

impl Related<super::rental_review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RentalReview.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
