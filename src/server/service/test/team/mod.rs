use entity::{json::ContactInfo, sea_orm_active_enums::UserType};

use crate::{
    model::team::{CreateTeamDto, UpdateTeamDto},
    server::{
        error::AppError,
        service::{team::TeamService, user::UserService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn new_team(name: &str, available_seats: i32) -> CreateTeamDto {
    CreateTeamDto {
        name: name.to_string(),
        description: "Endurance outfit".to_string(),
        logo_url: None,
        location: "Sebring, FL".to_string(),
        specialties: vec!["endurance".to_string()],
        available_seats,
        requirements: Vec::new(),
        contact_info: ContactInfo::default(),
        social_links: None,
    }
}
