//! Completion workflow transitions and conversions.

use entity::sea_orm_active_enums::CompletionStatus;

use crate::model::{
    rental_completion::{RentalCompletionDetailDto, RentalCompletionDto, VehicleVitalsDto},
    review::ReviewDto,
};
use crate::server::model::party::Party;

/// Stage the completion moves to when `party` submits their part from `from`.
///
/// The renter files the return form first, then the owner confirms it.
pub fn next_status(from: CompletionStatus, party: Party) -> Option<CompletionStatus> {
    match (from, party) {
        (CompletionStatus::PendingRenter, Party::Renter) => Some(CompletionStatus::PendingOwner),
        (CompletionStatus::PendingOwner, Party::Owner) => Some(CompletionStatus::Completed),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct RentalCompletionDetail {
    pub completion: entity::rental_completion::Model,
    pub vitals: Vec<entity::vehicle_vitals::Model>,
    pub reviews: Vec<entity::rental_review::Model>,
}

impl From<entity::rental_completion::Model> for RentalCompletionDto {
    fn from(c: entity::rental_completion::Model) -> Self {
        Self {
            id: c.id,
            reservation_id: c.reservation_id,
            vehicle_id: c.vehicle_id,
            renter_id: c.renter_id,
            owner_id: c.owner_id,
            status: c.status,
            renter_return_form: c.renter_return_form,
            owner_return_review: c.owner_return_review,
            completion_notes: c.completion_notes,
            completed_at: c.completed_at,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl From<entity::vehicle_vitals::Model> for VehicleVitalsDto {
    fn from(v: entity::vehicle_vitals::Model) -> Self {
        Self {
            id: v.id,
            rental_completion_id: v.rental_completion_id,
            vehicle_id: v.vehicle_id,
            engine_temp: v.engine_temp,
            oil_pressure: v.oil_pressure,
            oil_level: v.oil_level,
            coolant_level: v.coolant_level,
            tire_pressure: v.tire_pressure,
            tire_condition: v.tire_condition,
            brake_pad_condition: v.brake_pad_condition,
            brake_fluid_level: v.brake_fluid_level,
            body_condition: v.body_condition,
            interior_condition: v.interior_condition,
            notes: v.notes,
            submitted_by: v.submitted_by,
            submitted_at: v.submitted_at,
        }
    }
}

impl From<RentalCompletionDetail> for RentalCompletionDetailDto {
    fn from(detail: RentalCompletionDetail) -> Self {
        Self {
            completion: detail.completion.into(),
            vitals: detail.vitals.into_iter().map(VehicleVitalsDto::from).collect(),
            reviews: detail.reviews.into_iter().map(ReviewDto::from).collect(),
        }
    }
}
