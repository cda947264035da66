use chrono::{DateTime, NaiveDate, Utc};
use entity::{
    json::{OwnerReturnReview, RenterReturnForm, TirePressure},
    sea_orm_active_enums::{
        CompletionStatus, FluidLevel, FuelLevel, VehicleCondition, WearCondition,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::review::ReviewDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RentalCompletionDto {
    pub id: i32,
    pub reservation_id: i32,
    pub vehicle_id: i32,
    pub renter_id: String,
    pub owner_id: String,
    #[schema(value_type = String)]
    pub status: CompletionStatus,
    #[schema(value_type = Option<Object>)]
    pub renter_return_form: Option<RenterReturnForm>,
    #[schema(value_type = Option<Object>)]
    pub owner_return_review: Option<OwnerReturnReview>,
    pub completion_notes: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A completion with its vitals and reviews.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RentalCompletionDetailDto {
    #[serde(flatten)]
    pub completion: RentalCompletionDto,
    pub vitals: Vec<VehicleVitalsDto>,
    pub reviews: Vec<ReviewDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateRentalCompletionDto {
    pub reservation_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RenterReturnDto {
    pub return_date: NaiveDate,
    #[schema(value_type = String)]
    pub vehicle_condition: VehicleCondition,
    #[schema(value_type = String)]
    pub fuel_level: FuelLevel,
    pub mileage: i32,
    pub notes: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct OwnerReviewDto {
    pub vehicle_received: bool,
    pub condition_matches: bool,
    pub fuel_level_matches: bool,
    pub mileage_matches: bool,
    pub damage_reported: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    pub notes: Option<String>,
    pub completion_notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct VehicleVitalsDto {
    pub id: i32,
    pub rental_completion_id: i32,
    pub vehicle_id: i32,
    pub engine_temp: Option<f64>,
    pub oil_pressure: Option<f64>,
    #[schema(value_type = Option<String>)]
    pub oil_level: Option<FluidLevel>,
    #[schema(value_type = Option<String>)]
    pub coolant_level: Option<FluidLevel>,
    #[schema(value_type = Option<Object>)]
    pub tire_pressure: Option<TirePressure>,
    #[schema(value_type = Option<String>)]
    pub tire_condition: Option<WearCondition>,
    #[schema(value_type = Option<String>)]
    pub brake_pad_condition: Option<WearCondition>,
    #[schema(value_type = Option<String>)]
    pub brake_fluid_level: Option<FluidLevel>,
    #[schema(value_type = Option<String>)]
    pub body_condition: Option<VehicleCondition>,
    #[schema(value_type = Option<String>)]
    pub interior_condition: Option<VehicleCondition>,
    pub notes: Option<String>,
    pub submitted_by: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct SubmitVitalsDto {
    pub engine_temp: Option<f64>,
    pub oil_pressure: Option<f64>,
    #[schema(value_type = Option<String>)]
    pub oil_level: Option<FluidLevel>,
    #[schema(value_type = Option<String>)]
    pub coolant_level: Option<FluidLevel>,
    #[schema(value_type = Option<Object>)]
    pub tire_pressure: Option<TirePressure>,
    #[schema(value_type = Option<String>)]
    pub tire_condition: Option<WearCondition>,
    #[schema(value_type = Option<String>)]
    pub brake_pad_condition: Option<WearCondition>,
    #[schema(value_type = Option<String>)]
    pub brake_fluid_level: Option<FluidLevel>,
    #[schema(value_type = Option<String>)]
    pub body_condition: Option<VehicleCondition>,
    #[schema(value_type = Option<String>)]
    pub interior_condition: Option<VehicleCondition>,
    pub notes: Option<String>,
}
