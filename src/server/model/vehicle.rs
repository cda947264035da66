//! Vehicle parameters, aggregates and conversions.

use entity::json::AddOn;

use crate::model::{
    availability::AvailabilityDto,
    track::TrackDto,
    user::UserSummaryDto,
    vehicle::{VehicleDetailDto, VehicleDto, VehicleImageDto, VehicleSummaryDto},
};

/// New listing. The owner is the signed-in user; images are URLs in display order.
#[derive(Debug, Clone)]
pub struct CreateVehicleParams {
    pub owner_id: String,
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
    pub amenities: Vec<String>,
    pub add_ons: Vec<AddOn>,
    pub images: Vec<String>,
}

/// Listing card with the primary image URL, if any.
#[derive(Debug, Clone)]
pub struct VehicleWithImage {
    pub vehicle: entity::vehicle::Model,
    pub primary_image: Option<String>,
}

/// Listing page aggregate.
#[derive(Debug, Clone)]
pub struct VehicleDetail {
    pub vehicle: entity::vehicle::Model,
    pub images: Vec<entity::vehicle_image::Model>,
    pub owner: Option<entity::user::Model>,
    pub track: Option<entity::track::Model>,
    pub availability: Vec<entity::availability::Model>,
}

impl From<entity::vehicle::Model> for VehicleDto {
    fn from(vehicle: entity::vehicle::Model) -> Self {
        Self {
            id: vehicle.id,
            owner_id: vehicle.owner_id,
            track_id: vehicle.track_id,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            daily_rate: vehicle.daily_rate,
            description: vehicle.description,
            horsepower: vehicle.horsepower,
            transmission: vehicle.transmission,
            drivetrain: vehicle.drivetrain,
            engine_type: vehicle.engine_type,
            mileage: vehicle.mileage,
            amenities: vehicle.amenities.0,
            add_ons: vehicle.add_ons.0,
            is_active: vehicle.is_active,
            is_approved: vehicle.is_approved,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}

impl From<entity::vehicle_image::Model> for VehicleImageDto {
    fn from(image: entity::vehicle_image::Model) -> Self {
        Self {
            id: image.id,
            vehicle_id: image.vehicle_id,
            image_url: image.image_url,
            is_primary: image.is_primary,
            position: image.position,
        }
    }
}

impl From<VehicleWithImage> for VehicleSummaryDto {
    fn from(value: VehicleWithImage) -> Self {
        Self {
            vehicle: value.vehicle.into(),
            primary_image: value.primary_image,
        }
    }
}

impl From<VehicleDetail> for VehicleDetailDto {
    fn from(detail: VehicleDetail) -> Self {
        Self {
            vehicle: detail.vehicle.into(),
            images: detail.images.into_iter().map(VehicleImageDto::from).collect(),
            owner: detail.owner.map(UserSummaryDto::from),
            track: detail.track.map(TrackDto::from),
            availability: detail
                .availability
                .into_iter()
                .map(AvailabilityDto::from)
                .collect(),
        }
    }
}
