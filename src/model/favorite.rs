use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::vehicle::VehicleSummaryDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub created_at: DateTime<Utc>,
    pub vehicle: Option<VehicleSummaryDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct FavoriteRequestDto {
    pub vehicle_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct IsFavoritedDto {
    pub is_favorited: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    Added,
    Removed,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ToggleFavoriteDto {
    pub action: ToggleAction,
    pub favorite_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FavoriteCountDto {
    pub count: u64,
}
