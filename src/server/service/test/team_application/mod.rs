use crate::{
    model::team_application::ApplyToTeamDto,
    server::{error::AppError, service::team_application::TeamApplicationService},
};
use entity::sea_orm_active_enums::ApplicationStatus;
use test_utils::{builder::TestBuilder, factory};

mod apply;

fn application(team_id: i32) -> ApplyToTeamDto {
    ApplyToTeamDto {
        team_id,
        message: "Looking for a seat at the endurance round".to_string(),
        driver_experience: "Three seasons of club racing".to_string(),
        preferred_dates: vec!["2030-07-12".to_string()],
    }
}
