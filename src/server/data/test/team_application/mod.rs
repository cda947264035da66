use crate::{
    model::team_application::ApplyToTeamDto,
    server::data::team_application::TeamApplicationRepository,
};
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_pending;

fn application(team_id: i32) -> ApplyToTeamDto {
    ApplyToTeamDto {
        team_id,
        message: "Looking for a seat at the next enduro".to_string(),
        driver_experience: "Three seasons of club racing".to_string(),
        preferred_dates: Vec::new(),
    }
}
