use crate::server::data::{
    driver_profile::{DriverFilter, DriverProfileRepository},
    team::{TeamFilter, TeamRepository},
};
use entity::sea_orm_active_enums::ExperienceLevel;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod list_active;
