use crate::server::{
    data::{vehicle::VehicleRepository, vehicle_image::VehicleImageRepository},
    model::vehicle::CreateVehicleParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod set_approval;
