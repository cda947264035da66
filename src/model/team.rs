use chrono::{DateTime, Utc};
use entity::json::{ContactInfo, SocialLinks};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub logo_url: Option<String>,
    pub location: String,
    pub specialties: Vec<String>,
    pub available_seats: i32,
    pub requirements: Vec<String>,
    #[schema(value_type = Object)]
    pub contact_info: ContactInfo,
    #[schema(value_type = Option<Object>)]
    pub social_links: Option<SocialLinks>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateTeamDto {
    pub name: String,
    pub description: String,
    pub logo_url: Option<String>,
    pub location: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub available_seats: i32,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub contact_info: ContactInfo,
    #[schema(value_type = Option<Object>)]
    pub social_links: Option<SocialLinks>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateTeamDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub location: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub available_seats: Option<i32>,
    pub requirements: Option<Vec<String>>,
    #[schema(value_type = Option<Object>)]
    pub contact_info: Option<ContactInfo>,
    #[schema(value_type = Option<Object>)]
    pub social_links: Option<SocialLinks>,
    pub is_active: Option<bool>,
}
