use sea_orm::entity::prelude::*;

use crate::{
    json::TirePressure,
    sea_orm_active_enums::{FluidLevel, VehicleCondition, WearCondition},
};

/// Mechanical snapshot recorded by either party during a rental completion.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle_vitals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rental_completion_id: i32,
    pub vehicle_id: i32,
    pub engine_temp: Option<f64>,
    pub oil_pressure: Option<f64>,
    pub oil_level: Option<FluidLevel>,
    pub coolant_level: Option<FluidLevel>,
    pub tire_pressure: Option<TirePressure>,
    pub tire_condition: Option<WearCondition>,
    pub brake_pad_condition: Option<WearCondition>,
    pub brake_fluid_level: Option<FluidLevel>,
    pub body_condition: Option<VehicleCondition>,
    pub interior_condition: Option<VehicleCondition>,
    pub notes: Option<String>,
    pub submitted_by: String,
    pub submitted_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rental_completion::Entity",
        from = "Column::RentalCompletionId",
        to = "super::rental_completion::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    RentalCompletion,
}

impl Related<super::rental_completion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RentalCompletion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
