use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ApplicationStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TeamApplicationDto {
    pub id: i32,
    pub team_id: i32,
    pub driver_id: String,
    #[schema(value_type = String)]
    pub status: ApplicationStatus,
    pub message: String,
    pub driver_experience: String,
    pub preferred_dates: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What anyone may see about applications to a team.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PublicTeamApplicationDto {
    pub id: i32,
    #[schema(value_type = String)]
    pub status: ApplicationStatus,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ApplyToTeamDto {
    pub team_id: i32,
    pub message: String,
    pub driver_experience: String,
    #[serde(default)]
    pub preferred_dates: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateApplicationStatusDto {
    #[schema(value_type = String)]
    pub status: ApplicationStatus,
}
