use entity::sea_orm_active_enums::UserType;

use crate::{
    model::user::UpdateProfileDto,
    server::{error::AppError, service::user::UserService},
};
use test_utils::{builder::TestBuilder, factory};

mod profile;
