use chrono::{DateTime, Utc};
use entity::json::AddOn;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{availability::AvailabilityDto, track::TrackDto, user::UserSummaryDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub owner_id: String,
    pub track_id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Price per day in cents.
    pub daily_rate: i64,
    pub description: String,
    pub horsepower: Option<i32>,
    pub transmission: Option<String>,
    pub drivetrain: Option<String>,
    pub engine_type: Option<String>,
    pub mileage: Option<i32>,
    pub amenities: Vec<String>,
    #[schema(value_type = Vec<Object>)]
    pub add_ons: Vec<AddOn>,
    pub is_active: bool,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct VehicleImageDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub image_url: String,
    pub is_primary: bool,
    pub position: i32,
}

/// Listing card: the vehicle plus its primary image.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct VehicleSummaryDto {
    #[serde(flatten)]
    pub vehicle: VehicleDto,
    pub primary_image: Option<String>,
}

/// Full listing page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct VehicleDetailDto {
    #[serde(flatten)]
    pub vehicle: VehicleDto,
    pub images: Vec<VehicleImageDto>,
    pub owner: Option<UserSummaryDto>,
    pub track: Option<TrackDto>,
    pub availability: Vec<AvailabilityDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateVehicleDto {
    pub track_id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub daily_rate: i64,
    pub description: String,
    pub horsepower: Option<i32>,
    pub transmission: Option<String>,
    pub drivetrain: Option<String>,
    pub engine_type: Option<String>,
    pub mileage: Option<i32>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub add_ons: Vec<AddOn>,
    /// Image URLs in display order; the first becomes primary.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateVehicleDto {
    pub track_id: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub daily_rate: Option<i64>,
    pub description: Option<String>,
    pub horsepower: Option<i32>,
    pub transmission: Option<String>,
    pub drivetrain: Option<String>,
    pub engine_type: Option<String>,
    pub mileage: Option<i32>,
    pub amenities: Option<Vec<String>>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub add_ons: Option<Vec<AddOn>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AddVehicleImageDto {
    pub image_url: String,
    #[serde(default)]
    pub is_primary: bool,
}
