use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::rental_completion::SubmitVitalsDto;

pub struct VehicleVitalsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleVitalsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        completion: &entity::rental_completion::Model,
        submitted_by: &str,
        vitals: SubmitVitalsDto,
    ) -> Result<entity::vehicle_vitals::Model, DbErr> {
        entity::vehicle_vitals::ActiveModel {
            rental_completion_id: ActiveValue::Set(completion.id),
            vehicle_id: ActiveValue::Set(completion.vehicle_id),
            engine_temp: ActiveValue::Set(vitals.engine_temp),
            oil_pressure: ActiveValue::Set(vitals.oil_pressure),
            oil_level: ActiveValue::Set(vitals.oil_level),
            coolant_level: ActiveValue::Set(vitals.coolant_level),
            tire_pressure: ActiveValue::Set(vitals.tire_pressure),
            tire_condition: ActiveValue::Set(vitals.tire_condition),
            brake_pad_condition: ActiveValue::Set(vitals.brake_pad_condition),
            brake_fluid_level: ActiveValue::Set(vitals.brake_fluid_level),
            body_condition: ActiveValue::Set(vitals.body_condition),
            interior_condition: ActiveValue::Set(vitals.interior_condition),
            notes: ActiveValue::Set(vitals.notes),
            submitted_by: ActiveValue::Set(submitted_by.to_string()),
            submitted_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn list_by_completion(
        &self,
        rental_completion_id: i32,
    ) -> Result<Vec<entity::vehicle_vitals::Model>, DbErr> {
        entity::prelude::VehicleVitals::find()
            .filter(entity::vehicle_vitals::Column::RentalCompletionId.eq(rental_completion_id))
            .order_by_asc(entity::vehicle_vitals::Column::SubmittedAt)
            .all(self.db)
            .await
    }
}
