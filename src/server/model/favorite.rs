use crate::model::favorite::FavoriteDto;
use crate::server::model::vehicle::VehicleWithImage;

/// Favorite with the listing card of its vehicle, absent when the vehicle is gone.
#[derive(Debug, Clone)]
pub struct FavoriteWithVehicle {
    pub favorite: entity::favorite::Model,
    pub vehicle: Option<VehicleWithImage>,
}

impl From<FavoriteWithVehicle> for FavoriteDto {
    fn from(value: FavoriteWithVehicle) -> Self {
        Self {
            id: value.favorite.id,
            vehicle_id: value.favorite.vehicle_id,
            created_at: value.favorite.created_at,
            vehicle: value.vehicle.map(Into::into),
        }
    }
}

impl From<entity::favorite::Model> for FavoriteDto {
    fn from(favorite: entity::favorite::Model) -> Self {
        FavoriteWithVehicle {
            favorite,
            vehicle: None,
        }
        .into()
    }
}
