use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub external_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub rating: Option<f64>,
    pub total_rentals: i32,
    #[schema(value_type = Option<String>)]
    pub user_type: Option<UserType>,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Public subset of a user shown next to listings, messages and reviews.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserSummaryDto {
    pub external_id: String,
    pub name: String,
    pub profile_image: Option<String>,
    pub rating: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateProfileImageDto {
    pub image_url: String,
}
