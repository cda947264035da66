use chrono::{DateTime, Utc};
use entity::{
    json::{ContactInfo, SocialLinks},
    sea_orm_active_enums::ExperienceLevel,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DriverProfileDto {
    pub id: i32,
    pub user_id: String,
    pub bio: String,
    pub achievements: Option<String>,
    #[schema(value_type = String)]
    pub experience: ExperienceLevel,
    pub licenses: Vec<String>,
    pub preferred_categories: Vec<String>,
    pub availability: Vec<String>,
    pub location: String,
    #[schema(value_type = Object)]
    pub contact_info: ContactInfo,
    #[schema(value_type = Option<Object>)]
    pub social_links: Option<SocialLinks>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateDriverProfileDto {
    pub bio: String,
    pub achievements: Option<String>,
    #[schema(value_type = String)]
    pub experience: ExperienceLevel,
    #[serde(default)]
    pub licenses: Vec<String>,
    #[serde(default)]
    pub preferred_categories: Vec<String>,
    #[serde(default)]
    pub availability: Vec<String>,
    pub location: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub contact_info: ContactInfo,
    #[schema(value_type = Option<Object>)]
    pub social_links: Option<SocialLinks>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateDriverProfileDto {
    pub bio: Option<String>,
    pub achievements: Option<String>,
    #[schema(value_type = Option<String>)]
    pub experience: Option<ExperienceLevel>,
    pub licenses: Option<Vec<String>>,
    pub preferred_categories: Option<Vec<String>>,
    pub availability: Option<Vec<String>>,
    pub location: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub contact_info: Option<ContactInfo>,
    #[schema(value_type = Option<Object>)]
    pub social_links: Option<SocialLinks>,
    pub is_active: Option<bool>,
}
